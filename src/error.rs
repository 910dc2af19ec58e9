use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("arc {from} -> {to} has a negative capacity")]
    InvalidCapacity { from: usize, to: usize },

    #[error("node {node} is out of range [0, {num_nodes})")]
    NodeIndexOutOfRange { node: usize, num_nodes: usize },

    #[error("source and sink are both node {node}")]
    SourceEqualsSink { node: usize },

    // a label sequence or matrix row disagrees with the matrix shape
    #[error("{what} has length {actual}, expected {expected}")]
    DimensionMismatch { what: &'static str, expected: usize, actual: usize },
}
