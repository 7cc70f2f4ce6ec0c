use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::mesh::Mesh;
use crate::core::shared::{
    Triangle, ASCII_ENCODING, DEFAULT_TITLE, POLYDATA_DATASET, VTK_BANNER
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Second line of the file. Must not contain a line break.
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[remain::sorted]
#[derive(Error, Debug)]
pub enum Err {
    #[error("The title {0:?} spans more than one line.")]
    InvalidTitle(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to write mesh data: {0}")]
    WriteError(#[from] io::Error),
}

/// Writes the points and triangles to `path` in the ASCII VTK PolyData layout,
/// replacing whatever file is there.
pub fn write_vtk_mesh<F, P>(points: &[[F; 3]], triangles: &[Triangle], path: P) -> Result<(), Err>
    where
        F: Display,
        P: AsRef<Path>,
{
    write_vtk_mesh_with_config(points, triangles, path, &Config::default())
}

pub fn write_vtk_mesh_with_config<F, P>(points: &[[F; 3]], triangles: &[Triangle], path: P, cfg: &Config) -> Result<(), Err>
    where
        F: Display,
        P: AsRef<Path>,
{
    let path = path.as_ref();
    check_title(&cfg.title)?;
    let io_err = |source: io::Error| Err::Io { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    match encode(points, triangles, &mut writer, cfg) {
        Err(Err::WriteError(source)) => return Err(io_err(source)),
        other => other?,
    }
    // an error at flush would otherwise be dropped with the writer
    writer.flush().map_err(io_err)?;

    debug!("Wrote {} points and {} triangles to {}.", points.len(), triangles.len(), path.display());
    Ok(())
}

/// Writes a mesh record. The version, encoding and dataset lines are not carried over;
/// the title is.
pub fn write_mesh<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<(), Err> {
    let cfg = Config {
        title: mesh.get_title().trim_end_matches('\r').to_owned(),
    };
    write_vtk_mesh_with_config(mesh.get_points(), mesh.get_polygons(), path, &cfg)
}

/// Encodes the points and triangles into the provided writer.
/// The title is written as given; `write_vtk_mesh_with_config` checks it before the file is created.
pub fn encode<F, W>(points: &[[F; 3]], triangles: &[Triangle], writer: &mut W, cfg: &Config) -> Result<(), Err>
    where
        F: Display,
        W: Write,
{
    encode_header(writer, &cfg.title)?;
    encode_points(writer, points)?;
    encode_polygons(writer, triangles)?;
    Ok(())
}

fn check_title(title: &str) -> Result<(), Err> {
    if title.contains(['\n', '\r']) {
        return Err(Err::InvalidTitle(title.to_owned()));
    }
    Ok(())
}

fn encode_header<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    writeln!(writer, "{}", VTK_BANNER)?;
    writeln!(writer, "{}", title)?;
    writeln!(writer, "{}", ASCII_ENCODING)?;
    writeln!(writer, "{}", POLYDATA_DATASET)?;
    Ok(())
}

fn encode_points<F: Display, W: Write>(writer: &mut W, points: &[[F; 3]]) -> io::Result<()> {
    writeln!(writer, "POINTS {} float", points.len())?;
    for [x, y, z] in points {
        writeln!(writer, "{} {} {}", x, y, z)?;
    }
    Ok(())
}

fn encode_polygons<W: Write>(writer: &mut W, triangles: &[Triangle]) -> io::Result<()> {
    writeln!(writer, "POLYGONS {} {}", triangles.len(), triangles.len() * 4)?;
    for [a, b, c] in triangles {
        writeln!(writer, "3 {} {} {}", a, b, c)?;
    }
    Ok(())
}
