use std::io::Write;

use anyhow::Context;
use plyreader_mesh::Mesh;

use crate::args;

pub fn info_command<W: Write>(args: args::InfoArgs, out: &mut W) -> anyhow::Result<()> {
    let mesh = plyreader_ply::read_ply(&args.ply_path)
        .with_context(|| format!("failed to read {}", args.ply_path))?;
    write_info(&mesh, out)?;
    Ok(())
}

fn write_info<W: Write>(mesh: &Mesh, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "vertices: {}", mesh.vertex_count())?;
    writeln!(out, "faces: {}", mesh.face_count())?;
    match mesh.bounds() {
        Some((min, max)) => {
            writeln!(out, "min: {} {} {}", min.x, min.y, min.z)?;
            writeln!(out, "max: {} {} {}", max.x, max.y, max.z)?;
        }
        None => writeln!(out, "bounds: none")?,
    }
    Ok(())
}
