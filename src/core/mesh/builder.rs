use thiserror::Error;

use crate::core::shared::{
    Point, Triangle, ASCII_ENCODING, DEFAULT_TITLE, POLYDATA_DATASET, VTK_BANNER
};
use super::Mesh;

/// Assembles a [`Mesh`]. The header lines default to what the writer emits,
/// so a mesh built from scratch looks like one that was read back from a written file.
pub struct MeshBuilder {
    version: String,
    title: String,
    encoding: String,
    dataset: String,
    points: Option<Vec<Point>>,
    polygons: Vec<Triangle>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self {
            version: VTK_BANNER.to_owned(),
            title: DEFAULT_TITLE.to_owned(),
            encoding: ASCII_ENCODING.to_owned(),
            dataset: POLYDATA_DATASET.to_owned(),
            points: None,
            polygons: Vec::new(),
        }
    }

    pub fn set_version(&mut self, version: &str) {
        self.version = version.to_owned();
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    pub fn set_encoding(&mut self, encoding: &str) {
        self.encoding = encoding.to_owned();
    }

    pub fn set_dataset(&mut self, dataset: &str) {
        self.dataset = dataset.to_owned();
    }

    /// Replaces the points; setting them twice keeps the last ones.
    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points = Some(points);
    }

    /// Replaces the triangles; setting them twice keeps the last ones.
    pub fn set_polygons(&mut self, polygons: Vec<Triangle>) {
        self.polygons = polygons;
    }

    pub fn has_points(&self) -> bool {
        self.points.is_some()
    }

    /// Builds the mesh. Triangles are not checked against the points;
    /// see [`Mesh::check_connectivity`].
    pub fn build(self) -> Result<Mesh, Err> {
        let Self { version, title, encoding, dataset, points, polygons } = self;
        let points = points.ok_or(Err::MissingPoints)?;
        Ok(
            Mesh {
                version,
                title,
                encoding,
                dataset,
                points,
                polygons,
            }
        )
    }
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[remain::sorted]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Err {
    #[error("The mesh has no points.")]
    MissingPoints,

    #[error("The triangles and the points are not compatible; the triangles refer to point {0} but there are only {1} points.")]
    PointsAndConnectivityNotCompatible(usize, usize),
}
