//! model.rs
//! Translates the weighted graph into a MILP instance whose optimal solution
//! is a maximum-weight spanning tree.
//!
//! The encoding, per edge (u,v):
//! - one binary variable `x_u_v`, 1 iff the edge is in the tree;
//! - two continuous flow variables `f_u_v` and `f_v_u` (one per directed
//!   traversal of the undirected edge), lower bound 0.
//!
//! Constraints:
//! - cardinality: sum of all `x` equals N-1;
//! - flow conservation: net outflow is N-1 at the root and -1 everywhere
//!   else, which routes one unit of supply from the root to every other
//!   node and is feasible only if the selected edges connect the graph;
//! - capacity coupling: each directed flow is at most `x * (N-1)`, so flow
//!   can only cross selected edges.
//!
//! Cardinality plus connectivity force acyclicity, so no subtour
//! elimination is needed.

use super::error::SolveError;
use crate::graph::{NodeId, WeightedGraph};
use good_lp::{constraint, variable, Constraint, Expression, ProblemVariables, Variable};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// The selection variable for one input edge, kept alongside the original
/// endpoints and weight so the decoder never has to consult the solver's
/// variable namespace.
pub(crate) struct EdgeVar {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
    pub selected: Variable,
}

/// A fully specified MILP instance, ready to hand to the solver backend.
pub(crate) struct TreeModel {
    pub variables: ProblemVariables,
    pub objective: Expression,
    pub constraints: Vec<Constraint>,
    pub edge_vars: Vec<EdgeVar>,
}

impl TreeModel {
    /// Builds the MILP for `graph`. Assumes at least two nodes; the
    /// single-node case is handled before model construction.
    pub(crate) fn build(graph: &WeightedGraph) -> Result<TreeModel, SolveError> {
        let node_count = graph.node_count();

        // The weight inversion below needs the maximum edge weight, which
        // is undefined on an empty edge set.
        let max_weight = graph
            .edges()
            .map(|(_, _, w)| w)
            .fold(f64::NEG_INFINITY, f64::max);
        if !max_weight.is_finite() {
            return Err(SolveError::InvalidInput(
                "cannot build a spanning-tree model without edges".to_string(),
            ));
        }

        let mut variables = ProblemVariables::new();
        let mut constraints = Vec::new();
        let mut edge_vars = Vec::with_capacity(graph.edge_count());

        // Directed flow terms incident to each node, indexed by NodeId.
        let mut outgoing: Vec<Vec<Variable>> = vec![Vec::new(); node_count];
        let mut incoming: Vec<Vec<Variable>> = vec![Vec::new(); node_count];

        // One unit of supply per non-root node bounds every flow.
        let capacity = (node_count - 1) as f64;

        for edge in graph.graph().edge_references() {
            let (s, t) = (edge.source(), edge.target());
            let selected = variables.add(
                variable()
                    .binary()
                    .name(format!("x_{}_{}", s.index(), t.index())),
            );
            let flow_st = variables.add(
                variable()
                    .min(0.0)
                    .name(format!("f_{}_{}", s.index(), t.index())),
            );
            let flow_ts = variables.add(
                variable()
                    .min(0.0)
                    .name(format!("f_{}_{}", t.index(), s.index())),
            );

            outgoing[s.index()].push(flow_st);
            incoming[t.index()].push(flow_st);
            outgoing[t.index()].push(flow_ts);
            incoming[s.index()].push(flow_ts);

            // Capacity coupling: flow only crosses selected edges.
            constraints.push(constraint!(flow_st <= capacity * selected));
            constraints.push(constraint!(flow_ts <= capacity * selected));

            edge_vars.push(EdgeVar {
                source: s,
                target: t,
                weight: *edge.weight(),
                selected,
            });
        }

        // Weight inversion: the backend minimizes, so minimize
        // sum((max_weight - w_e) * x_e). At the fixed cardinality N-1 this
        // is an affine shift of -sum(w_e * x_e), hence equivalent to
        // maximizing the original weights, with all coefficients >= 0.
        let objective: Expression = edge_vars
            .iter()
            .map(|ev| (max_weight - ev.weight) * ev.selected)
            .sum();

        // Cardinality: a spanning tree on N nodes has exactly N-1 edges.
        let total_selected: Expression = edge_vars
            .iter()
            .map(|ev| Expression::from(ev.selected))
            .sum();
        constraints.push(constraint!(total_selected == capacity));

        // Flow conservation. IDs are contiguous, so the first node is a
        // valid arbitrary root.
        let root = NodeIndex::new(0);
        for node in graph.graph().node_indices() {
            let out_flow: Expression = outgoing[node.index()]
                .iter()
                .map(|&f| Expression::from(f))
                .sum();
            let in_flow: Expression = incoming[node.index()]
                .iter()
                .map(|&f| Expression::from(f))
                .sum();
            let supply = if node == root { capacity } else { -1.0 };
            constraints.push(constraint!(out_flow - in_flow == supply));
        }

        Ok(TreeModel {
            variables,
            objective,
            constraints,
            edge_vars,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeMetadata;

    fn triangle() -> WeightedGraph {
        let mut g = WeightedGraph::new();
        let a = g.add_node(NodeMetadata::named("A"));
        let b = g.add_node(NodeMetadata::named("B"));
        let c = g.add_node(NodeMetadata::named("C"));
        g.add_edge(a, b, 3.0);
        g.add_edge(b, c, 5.0);
        g.add_edge(a, c, 1.0);
        g
    }

    #[test]
    fn test_model_dimensions() {
        let model = TreeModel::build(&triangle()).expect("build failed");
        // One selection variable per edge.
        assert_eq!(model.edge_vars.len(), 3);
        // 2 capacity rows per edge + 1 cardinality + 1 conservation per node.
        assert_eq!(model.constraints.len(), 2 * 3 + 1 + 3);
    }

    #[test]
    fn test_build_rejects_empty_edge_set() {
        let mut g = WeightedGraph::new();
        g.add_node(NodeMetadata::named("A"));
        g.add_node(NodeMetadata::named("B"));
        let err = match TreeModel::build(&g) {
            Ok(_) => panic!("expected InvalidInput for an empty edge set"),
            Err(e) => e,
        };
        assert!(matches!(err, SolveError::InvalidInput(_)));
    }
}
