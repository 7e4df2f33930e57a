//! Error types for reading sentinel encoded index traces.

use thiserror::Error;

/// Errors produced when validating raw index trace data, see
/// [IndexTrace::try_from_raw](crate::decompose::IndexTrace::try_from_raw).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraceError {
    /// Trace ends with indexes that are not followed by a sentinel.
    #[error("trace ends with a fragment that has no sentinel")]
    UnterminatedFragment,
    /// Negative value that is not one of the reserved sentinels.
    #[error("invalid sentinel value {0}, expected -1 (CCW) or -2 (CW)")]
    InvalidSentinel(i32),
    /// Index is not a valid ring position.
    #[error("index {index} out of range for ring with {vertex_count} vertexes")]
    IndexOutOfRange { index: i32, vertex_count: usize },
    /// Sentinel found with no indexes preceding it in its fragment.
    #[error("sentinel at position {position} terminates an empty fragment")]
    EmptyFragment { position: usize },
}
