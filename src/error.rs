//! Error taxonomy for the coverage engine.
//!
//! Only malformed configuration and references to absent vertices are
//! errors. Partial coverage, isolated vertices and cancelled runs are
//! valid outcomes and are reported through the solution record instead.

use crate::graph::VertexId;

/// Errors raised by graph construction, solvers and the I/O boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    /// A configuration value is out of range (budget, rate, size, penalty).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex id was referenced that the graph does not contain.
    #[error("vertex {0} not found in graph")]
    NotFound(VertexId),

    /// Reading or writing an instance or solution file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// An instance or solution record could not be (de)serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoverageError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        CoverageError::InvalidArgument(message.into())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CoverageError>;
