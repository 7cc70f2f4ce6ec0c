use log::debug;

use crate::core::mesh::builder::MeshBuilder;
use crate::core::shared::Point;
use crate::decode::lexer::Lexer;
use crate::decode::section::Section;
use crate::decode::{Config, Err};
use super::{BlockHeader, BlockParser, PREALLOC_LIMIT};

/// `POINTS <N> <dtype>` followed by `3N` numbers.
pub(crate) struct PointsBlock {
    header: BlockHeader,
    data_type: Option<String>,
}

impl PointsBlock {
    pub(crate) fn new(section: &Section, header_line: &str) -> Result<Self, Err> {
        let (header, rest) = BlockHeader::parse("POINTS", section, header_line)?;
        Ok(Self {
            header,
            data_type: rest.first().map(|ty| (*ty).to_owned()),
        })
    }
}

impl BlockParser for PointsBlock {
    fn parse(&self, lines: &[&str], cfg: &Config, builder: &mut MeshBuilder) -> Result<usize, Err> {
        let mut lexer = Lexer::new(self.header.body(lines), self.header.line + 1);
        let mut points: Vec<Point> = Vec::with_capacity(self.header.count.min(PREALLOC_LIMIT));

        while points.len() < self.header.count {
            let mut point = [0.0; 3];
            let mut filled = 0;
            for component in point.iter_mut() {
                match lexer.next_float()? {
                    Some(value) => *component = value,
                    None => break,
                }
                filled += 1;
            }
            if filled < 3 {
                self.header.end_of_block(points.len(), cfg)?;
                break;
            }
            points.push(point);
        }

        debug!(
            "Read {} points ({}) from {} lines after line {}.",
            points.len(),
            self.data_type.as_deref().unwrap_or("untyped"),
            lexer.lines_consumed(),
            self.header.line + 1
        );
        builder.set_points(points);
        Ok(lexer.lines_consumed())
    }

    fn header(&self) -> &BlockHeader {
        &self.header
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::section::locate_sections;
    use crate::decode::ShortBlockPolicy;

    fn parse_points(lines: &[&str], cfg: &Config) -> Result<(Vec<Point>, usize), Err> {
        let sections = locate_sections(lines);
        let block = PointsBlock::new(&sections[0], lines[sections[0].line])?;
        let mut builder = MeshBuilder::new();
        let consumed = block.parse(lines, cfg, &mut builder)?;
        let (points, _) = builder.build().unwrap().into_parts();
        Ok((points, consumed))
    }

    #[test]
    fn one_point_per_line() {
        let lines = ["POINTS 2 float", "0 1 2", "3 4 5"];
        let (points, consumed) = parse_points(&lines, &Config::default()).unwrap();
        assert_eq!(points, vec![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn packed_and_wrapped() {
        // three points on the first line, then a point split over two lines
        let lines = [
            "POINTS 4 float",
            "0 0 0 1 0 0 0 1 0",
            "-1.5e2 2.5E-1",
            "  .5",
        ];
        let (points, consumed) = parse_points(&lines, &Config::default()).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[1], [1.0, 0.0, 0.0]);
        assert_eq!(points[3], [-150.0, 0.25, 0.5]);
        assert_eq!(consumed, 3);
    }

    #[test]
    fn numbers_after_the_last_point_are_ignored() {
        let lines = ["POINTS 1 float", "1 2 3 4 5 junk", "not numbers at all"];
        let (points, consumed) = parse_points(&lines, &Config::default()).unwrap();
        assert_eq!(points, vec![[1.0, 2.0, 3.0]]);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn zero_points() {
        let lines = ["POINTS 0 float", "POLYGONS 0 0"];
        let (points, consumed) = parse_points(&lines, &Config::default()).unwrap();
        assert!(points.is_empty());
        assert_eq!(consumed, 0);
    }

    #[test]
    fn short_body() {
        let lines = ["POINTS 3 float", "0 0 0 1 1 1", "2 2", "POLYGONS 1 4", "3 0 1 2"];
        match parse_points(&lines, &Config::default()) {
            Err(Err::UnexpectedEndOfBlock { section, line, expected, found }) => {
                assert_eq!(section, "POINTS");
                assert_eq!(line, 1);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let cfg = Config { short_blocks: ShortBlockPolicy::Truncate, ..Config::default() };
        let (points, _) = parse_points(&lines, &cfg).unwrap();
        assert_eq!(points, vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
    }

    #[test]
    fn malformed_number() {
        let lines = ["POINTS 1 float", "1 2 x3"];
        assert!(matches!(
            parse_points(&lines, &Config::default()),
            Err(Err::InvalidNumber { line: 2, .. })
        ));
    }

    #[test]
    fn non_finite_and_plus_signed_numbers() {
        let lines = ["POINTS 1 float", "inf NaN +1"];
        match parse_points(&lines, &Config::default()) {
            Err(Err::InvalidNumber { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "inf");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let lines = ["POINTS 1 float", "0 0 +1"];
        assert!(matches!(
            parse_points(&lines, &Config::default()),
            Err(Err::InvalidNumber { line: 2, .. })
        ));
    }
}
