use clap::{Parser, Subcommand};

#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    pub ply_path: String,
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    pub ply_path: String,

    /// Output path for the rewritten PLY file.
    #[arg(short, long)]
    pub output: String,

    /// Fractional digits written per coordinate. Defaults to the shortest exact form.
    #[arg(short, long)]
    pub precision: Option<usize>,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print element counts and bounds of a mesh.
    Info(InfoArgs),
    /// Parse a mesh and write it back out as ASCII PLY.
    Convert(ConvertArgs),
}
