use thiserror::Error;

/// The distinct failure modes of a spanning-tree solve.
///
/// None of these are retried internally; every variant propagates to the
/// caller as-is. There is no partial result: either a validated tree is
/// returned or one of these errors is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The input graph cannot possibly admit a spanning tree: no nodes,
    /// too few edges, or a malformed (negative/NaN) weight. Detected
    /// before any solver variable is created.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The solver proved the model infeasible, which for this formulation
    /// means the input graph is disconnected.
    #[error("no spanning tree exists: the input graph is disconnected")]
    Infeasible,
    /// The solver gave up: unbounded status, numerical failure, or an
    /// internal fault. The caller may retry; this crate never does.
    #[error("solver failed: {0}")]
    SolverFailed(String),
    /// The decoded edge set is not a spanning tree. This signals a defect
    /// in the constraint encoding or the rounding tolerance, never a
    /// normal runtime condition.
    #[error("model inconsistency: {0}")]
    ModelInconsistency(String),
}
