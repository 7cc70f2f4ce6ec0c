use std::str::SplitWhitespace;

use super::Err;

/// A whitespace-delimited token together with the index of the line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub(crate) line: usize,
    pub(crate) text: &'a str,
}

impl Token<'_> {
    /// Validates the token as a plain decimal number: digits with an optional leading `-`,
    /// an optional decimal point and an optional `e`/`E` exponent.
    /// `inf`, `nan` and a leading `+` are rejected, as is anything that overflows to infinity.
    pub(crate) fn to_float(self) -> Result<f64, Err> {
        let invalid = || Err::InvalidNumber {
            line: self.line + 1,
            token: self.text.to_owned(),
        };
        if !is_decimal_literal(self.text) {
            return Err(invalid());
        }
        match self.text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(invalid()),
        }
    }

    /// Validates the token as a non-negative integer made of bare digits.
    pub(crate) fn to_index(self) -> Result<usize, Err> {
        let invalid = || Err::InvalidIndex {
            line: self.line + 1,
            token: self.text.to_owned(),
        };
        if !self.text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        self.text.parse::<usize>().map_err(|_| invalid())
    }
}

/// `-?(d+(.d*)?|.d+)([eE][+-]?d+)?`
fn is_decimal_literal(text: &str) -> bool {
    fn digits(bytes: &[u8]) -> usize {
        bytes.iter().take_while(|b| b.is_ascii_digit()).count()
    }

    let bytes = text.as_bytes();
    let mut pos = usize::from(bytes.first() == Some(&b'-'));

    let int_digits = digits(&bytes[pos..]);
    pos += int_digits;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = digits(&bytes[pos..]);
        pos += frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }
    pos == bytes.len()
}

/// Streams the tokens of a block body. Whitespace is the only separator and line
/// breaks carry no meaning, so values may be packed many per line or wrap onto the next one.
/// Lines are opened lazily; whatever follows the last requested token is never looked at.
pub(crate) struct Lexer<'a> {
    lines: &'a [&'a str],
    first_line: usize,
    next_line: usize,
    words: Option<SplitWhitespace<'a>>,
    last_line: usize,
}

impl<'a> Lexer<'a> {
    /// `first_line` is the index of `lines[0]` in the whole file.
    pub(crate) fn new(lines: &'a [&'a str], first_line: usize) -> Self {
        Self {
            lines,
            first_line,
            next_line: 0,
            words: None,
            last_line: first_line,
        }
    }

    /// Number of lines opened so far.
    pub(crate) fn lines_consumed(&self) -> usize {
        self.next_line
    }

    /// Index of the line the last token was taken from.
    pub(crate) fn last_line(&self) -> usize {
        self.last_line
    }

    pub(crate) fn next_float(&mut self) -> Result<Option<f64>, Err> {
        self.next().map(Token::to_float).transpose()
    }

    pub(crate) fn next_index(&mut self) -> Result<Option<usize>, Err> {
        self.next().map(Token::to_index).transpose()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(text) = self.words.as_mut().and_then(|words| words.next()) {
                self.last_line = self.first_line + self.next_line - 1;
                return Some(Token { line: self.last_line, text });
            }
            let lines = self.lines;
            let line: &'a str = *lines.get(self.next_line)?;
            self.words = Some(line.split_whitespace());
            self.next_line += 1;
        }
    }
}
