//! Computes maximum-weight spanning trees by delegation to an embedded
//! MILP solver: build the model, solve, decode and validate the result.
pub mod error;
mod model;
pub mod tree;

pub use error::SolveError;
pub use tree::SpanningTree;

use crate::graph::WeightedGraph;
use crate::validation;
use good_lp::{default_solver, ResolutionError, SolverModel};
use model::TreeModel;
use rayon::prelude::*;
use tracing::{debug, info};

/// Solve-session configuration.
///
/// The underlying solver's own diagnostic output stays suppressed either
/// way; `verbose` only controls whether this crate surfaces solve progress
/// at info level (otherwise debug).
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    pub verbose: bool,
}

/// Computes a maximum-weight spanning tree of `graph`.
///
/// Synchronous: blocks until the solver reports an outcome. Returns either
/// a structurally validated tree or one of the [`SolveError`] variants;
/// nothing is retried internally and no partial result is ever produced.
pub fn solve(graph: &WeightedGraph, config: &SolverConfig) -> Result<SpanningTree, SolveError> {
    validation::validate_input(graph)?;

    // A single node spans itself with zero edges. The MILP would have no
    // variables at all, so skip straight to the (still validated) result.
    if graph.node_count() == 1 {
        return SpanningTree::trivial(graph);
    }

    let TreeModel {
        variables,
        objective,
        constraints,
        edge_vars,
    } = TreeModel::build(graph)?;

    let constraint_count = constraints.len();
    if config.verbose {
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            constraints = constraint_count,
            "solving spanning-tree MILP"
        );
    } else {
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            constraints = constraint_count,
            "solving spanning-tree MILP"
        );
    }

    let mut problem = variables.minimise(objective).using(default_solver);
    for constraint in constraints {
        problem = problem.with(constraint);
    }

    // All session resources (variables, constraint rows) are owned by this
    // frame and dropped on exit, whether the solve succeeds or not.
    let solution = problem.solve().map_err(|e| match e {
        ResolutionError::Infeasible => SolveError::Infeasible,
        other => SolveError::SolverFailed(other.to_string()),
    })?;

    let result = SpanningTree::decode(graph, &edge_vars, &solution)?;
    if config.verbose {
        info!(total_weight = result.total_weight(), "spanning tree found");
    }
    Ok(result)
}

/// Solves several independent graphs in parallel.
///
/// Each solve owns its own model and variable namespace, so no
/// synchronization is involved. Results are returned in input order.
pub fn solve_all(
    graphs: &[WeightedGraph],
    config: &SolverConfig,
) -> Vec<Result<SpanningTree, SolveError>> {
    graphs.par_iter().map(|g| solve(g, config)).collect()
}
