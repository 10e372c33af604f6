use plyreader_mesh::MeshError;
use thiserror::Error;

pub type PlyResult<T> = Result<T, PlyError>;

/// Errors that abort a PLY parse.
///
/// Any of these discards the mesh under construction; there is no partial result.
#[derive(Debug, Error)]
pub enum PlyError {
    /// A `ply` magic line where it is not the first line of the file.
    #[error("unexpected `ply` header line")]
    InvalidHeader,

    /// A header keyword out of place, or a data record that does not hold three values.
    #[error("invalid line sequence")]
    InvalidSequence,

    /// An `element` line without a count.
    #[error("element declaration is missing its count")]
    InvalidElement,

    /// An `element` line whose count is not an unsigned integer.
    #[error("element count is not an unsigned integer")]
    InvalidElementCount,

    /// Input ended before the header declared the face element.
    #[error("input ended before the header was complete")]
    IncompleteHeader,

    /// Input ended before every declared vertex and face record was read.
    #[error("input ended after {found} of {expected} records")]
    UnexpectedEof { expected: usize, found: usize },

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
