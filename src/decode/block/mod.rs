pub(crate) mod points;
pub(crate) mod polygons;

use log::warn;

use crate::core::mesh::builder::MeshBuilder;
use super::section::{Section, SectionKind};
use super::{Config, Err, ShortBlockPolicy};

#[enum_dispatch::enum_dispatch]
pub(crate) trait BlockParser {
    /// Parses the block body out of `lines` (the whole file) and stores the result in
    /// the builder. Returns the number of body lines that were read.
    fn parse(&self, lines: &[&str], cfg: &Config, builder: &mut MeshBuilder) -> Result<usize, Err>;

    fn header(&self) -> &BlockHeader;
}

#[enum_dispatch::enum_dispatch(BlockParser)]
pub(crate) enum Block {
    Points(points::PointsBlock),
    Polygons(polygons::PolygonsBlock),
}

impl Block {
    /// Reads the header line of a located `POINTS` or `POLYGONS` section.
    /// Returns `None` for the sections this crate does not parse.
    pub(crate) fn from_section(section: &Section, lines: &[&str]) -> Result<Option<Self>, Err> {
        let block = match section.kind {
            SectionKind::Points => Block::Points(points::PointsBlock::new(section, lines[section.line])?),
            SectionKind::Polygons => Block::Polygons(polygons::PolygonsBlock::new(section, lines[section.line])?),
            SectionKind::Other => return Ok(None),
        };
        Ok(Some(block))
    }
}

/// Where a block sits in the file and how many elements its header declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlockHeader {
    pub(crate) name: &'static str,
    pub(crate) line: usize,
    pub(crate) body_end: usize,
    pub(crate) count: usize,
}

impl BlockHeader {
    /// Reads the element count from the second token of the header line.
    /// The remaining tokens are returned for the caller to interpret.
    fn parse<'a>(name: &'static str, section: &Section, header_line: &'a str) -> Result<(Self, Vec<&'a str>), Err> {
        let mut tokens = header_line.split_whitespace().skip(1);
        let count = tokens.next()
            .ok_or(Err::MissingCount { section: name, line: section.line + 1 })?;
        let count = count.parse::<usize>()
            .map_err(|_| Err::InvalidCount { section: name, line: section.line + 1, token: count.to_owned() })?;
        let header = Self {
            name,
            line: section.line,
            body_end: section.body_end,
            count,
        };
        Ok((header, tokens.collect()))
    }

    fn body<'a, 'b>(&self, lines: &'a [&'b str]) -> &'a [&'b str] {
        &lines[self.line + 1..self.body_end]
    }

    /// Handles a body that ran out after `found` of `count` elements.
    fn end_of_block(&self, found: usize, cfg: &Config) -> Result<(), Err> {
        match cfg.short_blocks {
            ShortBlockPolicy::Reject => Err(Err::UnexpectedEndOfBlock {
                section: self.name,
                line: self.line + 1,
                expected: self.count,
                found,
            }),
            ShortBlockPolicy::Truncate => {
                warn!(
                    "{} block at line {} declares {} elements but only {} are present; keeping those.",
                    self.name, self.line + 1, self.count, found
                );
                Ok(())
            }
        }
    }
}

/// Upper bound on what is reserved up front from a declared count, which the file may overstate.
const PREALLOC_LIMIT: usize = 1 << 16;
