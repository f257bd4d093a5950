//! Input validation executed before any MILP model is constructed.
//!
//! Everything rejected here is an `InvalidInput`: conditions under which a
//! spanning tree cannot possibly exist, or weights the model must not see.
//! Disconnectedness is deliberately not checked here; it surfaces from the
//! solver as `Infeasible`.

use crate::graph::WeightedGraph;
use crate::solver::SolveError;

/// Checks that `graph` is a well-formed solve input.
pub fn validate_input(graph: &WeightedGraph) -> Result<(), SolveError> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Err(SolveError::InvalidInput("graph has no nodes".to_string()));
    }

    for (a, b, weight) in graph.edges() {
        if weight.is_nan() || weight < 0.0 {
            return Err(SolveError::InvalidInput(format!(
                "edge ({}, {}) has malformed weight {}",
                a.index(),
                b.index(),
                weight
            )));
        }
    }

    if node_count > 1 {
        if graph.edge_count() == 0 {
            return Err(SolveError::InvalidInput("graph has no edges".to_string()));
        }
        if graph.edge_count() < node_count - 1 {
            return Err(SolveError::InvalidInput(format!(
                "{} edges cannot span {} nodes; at least {} are required",
                graph.edge_count(),
                node_count,
                node_count - 1
            )));
        }
    }

    Ok(())
}
