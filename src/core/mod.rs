/// The mesh record and its builder.
pub mod mesh;

/// Type aliases and format constants shared by the reader and the writer.
pub mod shared;
