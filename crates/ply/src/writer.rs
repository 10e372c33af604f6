use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use plyreader_mesh::Mesh;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Number of fractional digits written for each coordinate.
    ///
    /// When `None` each value is written with the fewest digits that parse back to the
    /// same `f32`.
    pub precision: Option<usize>,
}

fn write_coord<W: Write>(w: &mut W, v: f32, options: &WriteOptions) -> std::io::Result<()> {
    match options.precision {
        Some(p) => write!(w, "{:.*}", p, v),
        None => write!(w, "{}", v),
    }
}

/// Writes `mesh` as an ASCII PLY file.
///
/// The output holds a `vertex` element with `x y z` float properties followed by a
/// `face` element of triangle index lists, which is the layout the reader accepts.
pub fn write_ply<W: Write>(w: &mut W, mesh: &Mesh, options: &WriteOptions) -> std::io::Result<()> {
    writeln!(w, "ply")?;
    writeln!(w, "format ascii 1.0")?;
    writeln!(w, "element vertex {}", mesh.vertices().len())?;
    writeln!(w, "property float x")?;
    writeln!(w, "property float y")?;
    writeln!(w, "property float z")?;
    writeln!(w, "element face {}", mesh.faces().len())?;
    writeln!(w, "property list uchar int vertex_indices")?;
    writeln!(w, "end_header")?;

    for v in mesh.vertices() {
        write_coord(w, v.x, options)?;
        write!(w, " ")?;
        write_coord(w, v.y, options)?;
        write!(w, " ")?;
        write_coord(w, v.z, options)?;
        writeln!(w)?;
    }
    for f in mesh.faces() {
        writeln!(w, "3 {} {} {}", f.p0, f.p1, f.p2)?;
    }
    Ok(())
}

pub fn save_ply<P: AsRef<Path>>(p: P, mesh: &Mesh, options: &WriteOptions) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(p)?);
    write_ply(&mut w, mesh, options)?;
    w.flush()
}
