use log::{debug, trace};
use plyreader_mesh::Mesh;

use crate::error::{PlyError, PlyResult};
use crate::tokens::{parse_count, parse_float_triple, parse_indexed_uint_triple};

/// Position of the reader within a PLY file.
///
/// A file is walked as:
///
/// ```text
/// HeaderStart -> ReadNextLine -> {VertexCount|FaceCount|Property}* -> EndHeader
///             -> {ParseVertices}* -> {ParseFaces}* -> Finished
/// ```
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ParserState {
    HeaderStart,
    ReadNextLine,
    VertexCount,
    FaceCount,
    Property,
    EndHeader,
    ParseVertices,
    ParseFaces,
    Finished,
}

/// Picks the state for a line that does not start with a header keyword.
///
/// Such a line is always taken as a data record: a vertex while fewer than `num_v`
/// records have been read and a face after that. Nothing tracks whether `end_header`
/// has been seen, so an unknown keyword in the middle of the header is read as a
/// record too and usually fails to parse as one.
fn classify_record(element_idx: usize, num_v: usize) -> ParserState {
    if element_idx < num_v {
        ParserState::ParseVertices
    } else {
        ParserState::ParseFaces
    }
}

/// Computes the state that `line` moves the reader to.
///
/// This only inspects the line's leading keyword. Values on the line are read when the
/// returned state is entered, see [`HeaderStateMachine::feed`].
///
/// # Arguments
///
/// * `state` - The current state.
/// * `line` - The next line of input, without its line terminator.
/// * `element_idx` - The number of data records read so far.
/// * `num_v` - The declared vertex count, or 0 if it has not been read yet.
pub fn next_state(
    state: ParserState,
    line: &str,
    element_idx: usize,
    num_v: usize,
) -> PlyResult<ParserState> {
    use ParserState::*;

    if line.starts_with("ply") {
        match state {
            HeaderStart => Ok(ReadNextLine),
            _ => Err(PlyError::InvalidHeader),
        }
    } else if line.starts_with("format") || line.starts_with("comment") {
        match state {
            ReadNextLine => Ok(ReadNextLine),
            _ => Err(PlyError::InvalidSequence),
        }
    } else if line.starts_with("element") {
        // The first element is always the vertex list; any later one is the face list.
        match state {
            ReadNextLine => Ok(VertexCount),
            _ => Ok(FaceCount),
        }
    } else if line.starts_with("property") {
        match state {
            VertexCount | FaceCount | Property => Ok(Property),
            _ => Err(PlyError::InvalidSequence),
        }
    } else if line.starts_with("end_header") {
        Ok(EndHeader)
    } else {
        Ok(classify_record(element_idx, num_v))
    }
}

/// Builds a [`Mesh`] from the lines of a PLY file, one line at a time.
///
/// The mesh is allocated when the face count is read, at which point both element
/// counts are known. Each data record after that fills in the next vertex and then the
/// next face. The mesh only leaves the machine through [`HeaderStateMachine::finish`]
/// once every slot has been written; on any error it is dropped with the machine.
#[derive(Debug)]
pub struct HeaderStateMachine {
    state: ParserState,
    num_v: Option<usize>,
    num_f: Option<usize>,
    element_idx: usize,
    line_no: usize,
    mesh: Option<Mesh>,
}

impl HeaderStateMachine {
    pub fn new() -> Self {
        Self {
            state: ParserState::HeaderStart,
            num_v: None,
            num_f: None,
            element_idx: 0,
            line_no: 0,
            mesh: None,
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == ParserState::Finished
    }

    /// Number of data records written to the mesh so far.
    pub fn element_idx(&self) -> usize {
        self.element_idx
    }

    fn record_count(&self) -> Option<usize> {
        Some(self.num_v? + self.num_f?)
    }

    /// Advances the machine by one line and returns the new state.
    ///
    /// Lines fed after the machine has finished are ignored.
    pub fn feed(&mut self, line: &str) -> PlyResult<ParserState> {
        if self.is_finished() {
            return Ok(self.state);
        }
        self.line_no += 1;
        let next = self.transition(line).map_err(|e| {
            debug!("line {}: {} ({:?})", self.line_no, e, line);
            e
        })?;
        trace!("line {}: {:?} -> {:?}", self.line_no, self.state, next);
        self.state = next;
        Ok(next)
    }

    fn transition(&mut self, line: &str) -> PlyResult<ParserState> {
        let num_v = self.num_v.unwrap_or(0);
        let next = next_state(self.state, line, self.element_idx, num_v)?;
        match next {
            ParserState::HeaderStart => Err(PlyError::InvalidHeader),
            ParserState::VertexCount => {
                let count = parse_count(line)?;
                debug!("vertex count: {}", count);
                self.num_v = Some(count);
                Ok(next)
            }
            ParserState::FaceCount => {
                let count = parse_count(line)?;
                // Faces must follow the vertex declaration, and only one mesh is built.
                let num_v = self.num_v.ok_or(PlyError::InvalidSequence)?;
                if self.mesh.is_some() {
                    return Err(PlyError::InvalidSequence);
                }
                debug!("face count: {}", count);
                self.mesh = Some(Mesh::create(num_v, count)?);
                self.num_f = Some(count);
                Ok(next)
            }
            ParserState::EndHeader if self.record_count() == Some(0) => {
                debug!("header declares no records");
                Ok(ParserState::Finished)
            }
            ParserState::ParseVertices => {
                let v = parse_float_triple(line)?;
                let mesh = self.mesh.as_mut().ok_or(PlyError::InvalidSequence)?;
                mesh.set_vertex(self.element_idx, v)?;
                self.element_idx += 1;
                Ok(self.finished_or(next))
            }
            ParserState::ParseFaces => {
                if self.element_idx < num_v {
                    return Err(PlyError::InvalidSequence);
                }
                let f = parse_indexed_uint_triple(line)?;
                let mesh = self.mesh.as_mut().ok_or(PlyError::InvalidSequence)?;
                mesh.set_face(self.element_idx - num_v, f)?;
                self.element_idx += 1;
                Ok(self.finished_or(next))
            }
            _ => Ok(next),
        }
    }

    // Stop as soon as the last declared record is written.
    fn finished_or(&self, next: ParserState) -> ParserState {
        if self.record_count() == Some(self.element_idx) {
            debug!("read all {} records", self.element_idx);
            ParserState::Finished
        } else {
            next
        }
    }

    /// Marks the end of input.
    pub fn end_of_input(&mut self) {
        trace!("end of input: {:?} -> Finished", self.state);
        self.state = ParserState::Finished;
    }

    /// Consumes the machine and returns the mesh if every declared record was read.
    pub fn finish(self) -> PlyResult<Mesh> {
        let mesh = self.mesh.ok_or(PlyError::IncompleteHeader)?;
        let expected = mesh.vertex_count() + mesh.face_count();
        if !mesh.is_complete() {
            return Err(PlyError::UnexpectedEof {
                expected,
                found: self.element_idx,
            });
        }
        Ok(mesh)
    }
}

impl Default for HeaderStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
