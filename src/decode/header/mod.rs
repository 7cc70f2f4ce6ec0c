use log::warn;

use crate::core::shared::{ASCII_ENCODING, POLYDATA_DATASET};
use super::{Config, EncodingPolicy, Err};

/// The four fixed lines at the top of a legacy VTK file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FileHeader<'a> {
    pub(crate) version: &'a str,
    pub(crate) title: &'a str,
    pub(crate) encoding: &'a str,
    pub(crate) dataset: &'a str,
}

pub(crate) fn decode_header<'a>(lines: &[&'a str], cfg: &Config) -> Result<FileHeader<'a>, Err> {
    if lines.len() < 3 {
        return Err(Err::TruncatedHeader(lines.len()));
    }
    let header = FileHeader {
        version: lines[0],
        title: lines[1],
        encoding: lines[2],
        dataset: lines.get(3).copied().unwrap_or(""),
    };

    if header.encoding != ASCII_ENCODING {
        match cfg.encoding {
            EncodingPolicy::Warn => warn!(
                "File encoding is {:?}, not {}; parsing continues.", header.encoding, ASCII_ENCODING
            ),
            EncodingPolicy::Reject => return Err(Err::UnsupportedEncoding(header.encoding.to_owned())),
        }
    }

    if header.dataset.split_whitespace().ne(POLYDATA_DATASET.split_whitespace()) {
        warn!("Dataset line is {:?}, expected {:?}.", header.dataset, POLYDATA_DATASET);
    }

    Ok(header)
}
