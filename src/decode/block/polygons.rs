use log::{debug, warn};

use crate::core::mesh::builder::MeshBuilder;
use crate::core::shared::Triangle;
use crate::decode::lexer::Lexer;
use crate::decode::section::Section;
use crate::decode::{Config, Err};
use super::{BlockHeader, BlockParser, PREALLOC_LIMIT};

/// `POLYGONS <M> <size>` followed by `M` entries of exactly 4 integers, `n i_0 i_1 i_2`.
/// Every entry is read as one run of 4 whatever its `n`; only the entries with `n == 3` are kept.
pub(crate) struct PolygonsBlock {
    header: BlockHeader,
    /// Total number of integers in the body as declared by the header, if it says so.
    declared_size: Option<usize>,
}

impl PolygonsBlock {
    pub(crate) fn new(section: &Section, header_line: &str) -> Result<Self, Err> {
        let (header, rest) = BlockHeader::parse("POLYGONS", section, header_line)?;
        let declared_size = rest.first().and_then(|size| size.parse::<usize>().ok());
        Ok(Self { header, declared_size })
    }
}

impl BlockParser for PolygonsBlock {
    fn parse(&self, lines: &[&str], cfg: &Config, builder: &mut MeshBuilder) -> Result<usize, Err> {
        let mut lexer = Lexer::new(self.header.body(lines), self.header.line + 1);
        let mut faces: Vec<Triangle> = Vec::with_capacity(self.header.count.min(PREALLOC_LIMIT));

        let mut entries = 0;
        let mut skipped = 0;
        let mut num_integers = 0;
        while entries < self.header.count {
            let Some(vertex_count) = lexer.next_index()? else {
                self.header.end_of_block(entries, cfg)?;
                break;
            };
            num_integers += 1;

            let mut face = [0; 3];
            let mut filled = 0;
            while filled < 3 {
                let Some(idx) = lexer.next_index()? else {
                    break;
                };
                face[filled] = idx;
                filled += 1;
            }
            num_integers += filled;
            if filled < 3 {
                self.header.end_of_block(entries, cfg)?;
                break;
            }

            if vertex_count == 3 {
                faces.push(face);
            } else {
                debug!(
                    "Skipping POLYGONS entry {} with {} vertices at line {}.",
                    entries, vertex_count, lexer.last_line() + 1
                );
                skipped += 1;
            }
            entries += 1;
        }

        if skipped > 0 {
            warn!(
                "Mesh contains non-triangular faces; {} of {} POLYGONS entries were skipped.",
                skipped, entries
            );
        }
        if let Some(size) = self.declared_size {
            if entries == self.header.count && size != num_integers {
                warn!(
                    "POLYGONS header at line {} declares {} integers but the body has {}.",
                    self.header.line + 1, size, num_integers
                );
            }
        }

        debug!(
            "Read {} triangles from {} lines after line {}.",
            faces.len(),
            lexer.lines_consumed(),
            self.header.line + 1
        );
        builder.set_polygons(faces);
        Ok(lexer.lines_consumed())
    }

    fn header(&self) -> &BlockHeader {
        &self.header
    }
}
