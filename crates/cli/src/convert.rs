use anyhow::Context;
use log::info;
use plyreader_ply::WriteOptions;

use crate::args;

pub fn convert_command(args: args::ConvertArgs) -> anyhow::Result<()> {
    let mesh = plyreader_ply::read_ply(&args.ply_path)
        .with_context(|| format!("failed to read {}", args.ply_path))?;
    let options = WriteOptions {
        precision: args.precision,
    };
    plyreader_ply::save_ply(&args.output, &mesh, &options)
        .with_context(|| format!("failed to write {}", args.output))?;
    info!(
        "wrote {} vertices and {} faces to {}",
        mesh.vertex_count(),
        mesh.face_count(),
        args.output
    );
    Ok(())
}
