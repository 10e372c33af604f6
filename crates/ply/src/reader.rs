use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use plyreader_mesh::Mesh;

use crate::error::PlyResult;
use crate::state::HeaderStateMachine;

/// A producer of input lines.
///
/// Returns `Ok(None)` once the input is exhausted. Lines are returned without their
/// line terminator.
pub trait LineSource {
    fn next_line(&mut self) -> PlyResult<Option<String>>;
}

impl<I: Iterator<Item = std::io::Result<String>>> LineSource for I {
    fn next_line(&mut self) -> PlyResult<Option<String>> {
        let line = self.next().transpose()?;
        Ok(line.map(|mut l| {
            // `BufRead::lines` already strips "\r\n" but other sources may not.
            if l.ends_with('\r') {
                l.pop();
            }
            l
        }))
    }
}

/// Parses a mesh out of the lines produced by `source`.
///
/// Reading stops once every declared vertex and face has been read; anything after
/// that is left in the source.
pub fn parse_lines<L: LineSource>(mut source: L) -> PlyResult<Mesh> {
    let mut machine = HeaderStateMachine::new();
    while !machine.is_finished() {
        match source.next_line()? {
            Some(line) => {
                machine.feed(&line)?;
            }
            None => machine.end_of_input(),
        }
    }
    let mesh = machine.finish()?;
    debug!(
        "parsed mesh with {} vertices and {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}

pub fn read_ply<P: AsRef<Path>>(p: P) -> PlyResult<Mesh> {
    let f = File::open(p)?;
    parse_lines(BufReader::new(f).lines())
}

pub fn parse_ply(data: &[u8]) -> PlyResult<Mesh> {
    parse_lines(data.lines())
}

pub trait PlyReader: BufRead {
    fn read_ply(&mut self) -> PlyResult<Mesh>;
}

impl<T: BufRead> PlyReader for T {
    fn read_ply(&mut self) -> PlyResult<Mesh> {
        parse_lines(self.lines())
    }
}
