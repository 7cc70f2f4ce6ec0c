/// Index of a point in [`crate::core::mesh::Mesh::get_points`].
pub type PointIdx = usize;

/// A 3-D point as stored in the mesh record.
pub type Point = [f64; 3];

/// A triangle given by three point IDs.
pub type Triangle = [PointIdx; 3];

/// Banner the writer puts on the first line of every file.
pub const VTK_BANNER: &str = "# vtk DataFile Version 3.0";

/// The only encoding this crate understands.
pub const ASCII_ENCODING: &str = "ASCII";

/// Dataset line of a PolyData file.
pub const POLYDATA_DATASET: &str = "DATASET POLYDATA";

/// Title the writer uses unless configured otherwise.
pub const DEFAULT_TITLE: &str = "vtk output";
