//! tree.rs
//! The decoded spanning-tree result and the solution decoder.

use super::error::SolveError;
use super::model::EdgeVar;
use crate::analysis::topology;
use crate::graph::{NodeId, NodeMetadata, WeightedGraph};
use good_lp::Solution;
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;

/// Rounding threshold for binary selection variables. MILP backends report
/// values with small numeric noise, so selection is decided by threshold,
/// never by exact equality with 1.0.
const SELECTION_THRESHOLD: f64 = 0.5;

/// A validated maximum-weight spanning tree.
///
/// Contains every node of the input graph (metadata carried through
/// unchanged) and exactly the selected edges with their original weights.
/// Immutable after construction; only read accessors are exposed.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    tree: UnGraph<NodeMetadata, f64>,
    total_weight: f64,
}

impl SpanningTree {
    /// Reads the selection variables back from a solver solution and
    /// assembles the result tree.
    pub(crate) fn decode<S: Solution>(
        graph: &WeightedGraph,
        edge_vars: &[EdgeVar],
        solution: &S,
    ) -> Result<Self, SolveError> {
        let node_count = graph.node_count();
        let mut tree = UnGraph::with_capacity(node_count, node_count.saturating_sub(1));
        for node in graph.graph().node_indices() {
            // Append-only input graph, so indices transfer one-to-one.
            tree.add_node(graph.node_meta(node).clone());
        }

        let mut total_weight = 0.0;
        for ev in edge_vars {
            if solution.value(ev.selected) > SELECTION_THRESHOLD {
                tree.add_edge(ev.source, ev.target, ev.weight);
                total_weight += ev.weight;
            }
        }

        Self::validated(tree, total_weight)
    }

    /// The spanning tree of a single-node graph: no edges, total weight 0.
    pub(crate) fn trivial(graph: &WeightedGraph) -> Result<Self, SolveError> {
        let mut tree = UnGraph::with_capacity(graph.node_count(), 0);
        for node in graph.graph().node_indices() {
            tree.add_node(graph.node_meta(node).clone());
        }
        Self::validated(tree, 0.0)
    }

    // Post-decode structural validation. A failure here means the
    // constraint encoding or the rounding threshold is wrong, so it
    // surfaces as ModelInconsistency instead of a silently malformed tree.
    fn validated(tree: UnGraph<NodeMetadata, f64>, total_weight: f64) -> Result<Self, SolveError> {
        let expected = tree.node_count().saturating_sub(1);
        if tree.edge_count() != expected {
            return Err(SolveError::ModelInconsistency(format!(
                "decoded {} edges, expected {}",
                tree.edge_count(),
                expected
            )));
        }
        if !topology::is_spanning_tree(&tree) {
            return Err(SolveError::ModelInconsistency(
                "decoded edge set is not connected and acyclic".to_string(),
            ));
        }
        Ok(Self { tree, total_weight })
    }

    // --- Accessors ---

    pub fn tree(&self) -> &UnGraph<NodeMetadata, f64> {
        &self.tree
    }

    /// Sum of the original weights of the selected edges.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.tree.edge_count()
    }

    /// The selected edges as `(source, target, weight)` triples.
    pub fn edges(&self) -> Vec<(NodeId, NodeId, f64)> {
        self.tree
            .edge_references()
            .map(|e| (e.source(), e.target(), *e.weight()))
            .collect()
    }

    pub fn node_meta(&self, id: NodeId) -> &NodeMetadata {
        &self.tree[id]
    }

    /// Re-verifies the tree structure independently of the solve, for
    /// diagnostic and testing use.
    pub fn is_tree(&self) -> bool {
        topology::is_spanning_tree(&self.tree)
    }
}
