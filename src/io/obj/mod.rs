// use tobj to load the obj file and convert it to our internal mesh representation
use std::fmt::Debug;
use std::path::Path;

use log::debug;

use crate::core::mesh::{builder::MeshBuilder, Mesh};
use crate::core::shared::{Point, Triangle};

#[remain::sorted]
#[derive(Debug, thiserror::Error)]
pub enum Err {
    #[error("Failed to load OBJ file: {0}")]
    LoadError(#[from] tobj::LoadError),
    #[error("Mesh Builder Error: {0}")]
    MeshBuilderError(#[from] crate::core::mesh::builder::Err),
}

/// Loads every model of an OBJ file into one triangulated mesh.
/// Faces with more than three vertices are triangulated; point IDs of later models
/// are shifted past the points of the earlier ones.
pub fn load_obj<P: AsRef<Path> + Debug>(path: P) -> Result<Mesh, Err> {
    let op = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };

    let (models, _materials) = tobj::load_obj(path.as_ref(), &op)?;

    let mut points: Vec<Point> = Vec::new();
    let mut faces: Vec<Triangle> = Vec::new();
    for model in &models {
        let offset = points.len();
        points.extend(
            model.mesh.positions.chunks_exact(3)
                .map(|x| [x[0] as f64, x[1] as f64, x[2] as f64])
        );
        faces.extend(
            model.mesh.indices.chunks_exact(3)
                .map(|x| [offset + x[0] as usize, offset + x[1] as usize, offset + x[2] as usize])
        );
    }
    debug!("Loaded {} models from {:?}: {} points, {} triangles.", models.len(), path, points.len(), faces.len());

    let mut builder = MeshBuilder::new();
    builder.set_points(points);
    builder.set_polygons(faces);
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube() {
        let mesh = load_obj("tests/data/cube.obj").unwrap();
        assert_eq!(mesh.num_points(), 8);
        // six quads
        assert_eq!(mesh.num_polygons(), 12);
        assert_eq!(mesh.get_encoding(), "ASCII");
        assert!(mesh.check_connectivity().is_ok());
    }

    #[test]
    fn missing_file() {
        assert!(matches!(load_obj("tests/data/no_such_file.obj"), Err(Err::LoadError(_))));
    }
}
