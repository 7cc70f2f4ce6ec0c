pub mod builder;

use crate::core::shared::{Point, PointIdx, Triangle};

/// Represents a triangulated PolyData mesh read from (or destined for) a legacy VTK file.
/// Point IDs are positional: the `i`-th entry of the points is referred to by `i` in the
/// triangles. The record is read-only once built; callers who want to transform it take
/// the sequences out with [`Mesh::into_parts`] and build new ones.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub(crate) version: String,
    pub(crate) title: String,
    pub(crate) encoding: String,
    pub(crate) dataset: String,
    pub(crate) points: Vec<Point>,
    pub(crate) polygons: Vec<Triangle>,
}

impl Mesh {
    /// The first line of the file, verbatim.
    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    /// The encoding line of the file, verbatim. Anything but `ASCII` was reported while reading.
    pub fn get_encoding(&self) -> &str {
        &self.encoding
    }

    pub fn get_dataset(&self) -> &str {
        &self.dataset
    }

    pub fn get_points(&self) -> &[Point] {
        &self.points
    }

    pub fn get_polygons(&self) -> &[Triangle] {
        &self.polygons
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// Gives up the point and triangle sequences.
    pub fn into_parts(self) -> (Vec<Point>, Vec<Triangle>) {
        (self.points, self.polygons)
    }

    /// Largest point ID referenced by the triangles, if there are any.
    pub fn max_point_index(&self) -> Option<PointIdx> {
        self.polygons.iter()
            .flat_map(|face| face.iter().copied())
            .max()
    }

    /// Checks that every triangle refers to an existing point.
    /// Reading never performs this check; it is up to the caller.
    pub fn check_connectivity(&self) -> Result<(), builder::Err> {
        match self.max_point_index() {
            Some(max) if max >= self.points.len() => Err(
                builder::Err::PointsAndConnectivityNotCompatible(max, self.points.len())
            ),
            _ => Ok(()),
        }
    }
}
