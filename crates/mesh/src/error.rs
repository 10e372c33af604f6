use thiserror::Error;

pub type MeshResult<T> = Result<T, MeshError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// Backing storage for one of the sequences could not be reserved.
    #[error("failed to allocate storage for {requested} {kind}")]
    Allocation { kind: &'static str, requested: usize },

    /// A slot or vertex reference lies outside of the sequence it indexes.
    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },
}
