pub mod lines;
pub mod section;
pub(crate) mod header;
pub(crate) mod lexer;
pub(crate) mod block;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::mesh::{builder::MeshBuilder, Mesh};
use block::{Block, BlockParser};
use section::{Section, SectionKind};

/// What to do when line 3 is not `ASCII`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingPolicy {
    /// Log a warning and read the file as ASCII anyway.
    #[default]
    Warn,
    Reject,
}

/// What to do when a file has more than one `POINTS` or `POLYGONS` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateSectionPolicy {
    /// The last header of each kind is read; earlier ones are skipped with a warning.
    #[default]
    LastWins,
    Reject,
}

/// What to do when a block body has fewer values than its header declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortBlockPolicy {
    #[default]
    Reject,
    /// Keep the complete elements read so far and log a warning.
    Truncate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub encoding: EncodingPolicy,
    pub duplicate_sections: DuplicateSectionPolicy,
    pub short_blocks: ShortBlockPolicy,
}

impl Config {
    /// Reads a configuration from JSON; missing fields take their default.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("The {section} header at line {line} repeats the one at line {first}.")]
    DuplicateSection { section: &'static str, first: usize, line: usize },

    #[error("Invalid element count {token:?} in the {section} header at line {line}.")]
    InvalidCount { section: &'static str, line: usize, token: String },

    #[error("Invalid point index {token:?} at line {line}.")]
    InvalidIndex { line: usize, token: String },

    #[error("Invalid number {token:?} at line {line}.")]
    InvalidNumber { line: usize, token: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("Mesh Builder Error: {0}")]
    MeshBuilderError(#[from] crate::core::mesh::builder::Err),

    #[error("The {section} header at line {line} has no element count.")]
    MissingCount { section: &'static str, line: usize },

    #[error("The file has no {0} section.")]
    MissingSection(&'static str),

    #[error("The file header is truncated; expected at least 3 lines but found {0}.")]
    TruncatedHeader(usize),

    #[error("The {section} block at line {line} ends after {found} of {expected} elements.")]
    UnexpectedEndOfBlock { section: &'static str, line: usize, expected: usize, found: usize },

    #[error("File encoding is {0:?}, not ASCII.")]
    UnsupportedEncoding(String),
}

/// Reads a triangulated ASCII VTK PolyData file with the default configuration.
pub fn read_vtk_mesh<P: AsRef<Path>>(path: P) -> Result<Mesh, Err> {
    read_vtk_mesh_with_config(path, &Config::default())
}

pub fn read_vtk_mesh_with_config<P: AsRef<Path>>(path: P, cfg: &Config) -> Result<Mesh, Err> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|source| Err::Io { path: path.to_path_buf(), source })?;
    decode(&text, cfg)
}

/// Decodes the content of a VTK file.
pub fn decode(text: &str, cfg: &Config) -> Result<Mesh, Err> {
    let lines = lines::split_lines(text);

    let header = header::decode_header(&lines, cfg)?;
    let mut builder = MeshBuilder::new();
    builder.set_version(header.version);
    builder.set_title(header.title);
    builder.set_encoding(header.encoding);
    builder.set_dataset(header.dataset);

    let sections = section::locate_sections(&lines);
    for block in select_blocks(&sections, &lines, cfg)? {
        let consumed = block.parse(&lines, cfg, &mut builder)?;
        let header = block.header();
        debug!("{} block at line {} done; {} body lines read.", header.name, header.line + 1, consumed);
    }

    if !builder.has_points() {
        return Err(Err::MissingSection("POINTS"));
    }
    Ok(builder.build()?)
}

/// Picks the `POINTS` and `POLYGONS` sections to read according to the duplicate policy
/// and reads their header lines.
fn select_blocks(sections: &[Section], lines: &[&str], cfg: &Config) -> Result<Vec<Block>, Err> {
    let mut points: Option<&Section> = None;
    let mut polygons: Option<&Section> = None;

    for section in sections {
        let (slot, name) = match section.kind {
            SectionKind::Points => (&mut points, "POINTS"),
            SectionKind::Polygons => (&mut polygons, "POLYGONS"),
            SectionKind::Other => {
                debug!("Skipping unsupported {} section at line {}.", section.keyword, section.line + 1);
                continue;
            }
        };
        if let Some(prev) = slot.replace(section) {
            match cfg.duplicate_sections {
                DuplicateSectionPolicy::LastWins => warn!(
                    "Another {} header at line {}; the one at line {} is ignored.",
                    name, section.line + 1, prev.line + 1
                ),
                DuplicateSectionPolicy::Reject => return Err(Err::DuplicateSection {
                    section: name,
                    first: prev.line + 1,
                    line: section.line + 1,
                }),
            }
        }
    }

    let mut blocks = Vec::new();
    for section in points.into_iter().chain(polygons) {
        if let Some(block) = Block::from_section(section, lines)? {
            blocks.push(block);
        }
    }
    Ok(blocks)
}
