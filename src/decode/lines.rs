/// Splits the file content on `'\n'`.
/// Empty lines and trailing whitespace (a `'\r'` included) are kept, so that the
/// `i`-th entry is line `i + 1` of the file.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// The first whitespace-delimited token of a line.
pub(crate) fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}
