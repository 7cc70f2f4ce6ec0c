/// Loads Wavefront OBJ files into [`crate::core::mesh::Mesh`] records.
pub mod obj;
