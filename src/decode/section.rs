use super::lines::first_token;

/// Keywords that open a block in a legacy VTK file. Only `POINTS` and `POLYGONS` are
/// parsed; the others are located so that they end the body of the block before them.
pub(crate) const BLOCK_KEYWORDS: &[&str] = &[
    "CELL_DATA",
    "COLOR_SCALARS",
    "FIELD",
    "LINES",
    "LOOKUP_TABLE",
    "METADATA",
    "NORMALS",
    "POINTS",
    "POINT_DATA",
    "POLYGONS",
    "SCALARS",
    "TENSORS",
    "TEXTURE_COORDINATES",
    "TRIANGLE_STRIPS",
    "VECTORS",
    "VERTICES",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Points,
    Polygons,
    Other,
}

impl SectionKind {
    fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "POINTS" => SectionKind::Points,
            "POLYGONS" => SectionKind::Polygons,
            _ => SectionKind::Other,
        }
    }
}

/// A located block header. The body spans the lines `line + 1 .. body_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub kind: SectionKind,
    pub keyword: &'a str,
    pub line: usize,
    pub body_end: usize,
}

/// Finds every block header in a single forward pass.
pub fn locate_sections<'a>(lines: &[&'a str]) -> Vec<Section<'a>> {
    let mut sections: Vec<Section<'a>> = Vec::new();
    for (idx, &line) in lines.iter().enumerate() {
        let Some(keyword) = first_token(line) else {
            continue;
        };
        if !BLOCK_KEYWORDS.contains(&keyword) {
            continue;
        }
        if let Some(prev) = sections.last_mut() {
            prev.body_end = idx;
        }
        sections.push(Section {
            kind: SectionKind::from_keyword(keyword),
            keyword,
            line: idx,
            body_end: lines.len(),
        });
    }
    sections
}
