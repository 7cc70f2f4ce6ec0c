// lib.rs

/// Contains the mesh record and the definitions shared by the reader and the writer.
pub mod core;

/// Defines the reader for ASCII VTK PolyData files.
pub mod decode;

/// Defines the writer for ASCII VTK PolyData files.
pub mod encode;

/// Contains the interface between other 3D geometry files (obj) and the `Mesh` record.
pub mod io;

pub use crate::core::mesh::Mesh;
pub use crate::decode::read_vtk_mesh;
pub use crate::encode::write_vtk_mesh;

/// Contains the most commonly used traits, types, and objects.
pub mod prelude {
    pub use crate::core::mesh::{Mesh, builder::MeshBuilder};
    pub use crate::core::shared::{Point, PointIdx, Triangle};
    pub use crate::decode::{self, read_vtk_mesh, read_vtk_mesh_with_config};
    pub use crate::encode::{self, write_mesh, write_vtk_mesh, write_vtk_mesh_with_config};
}
