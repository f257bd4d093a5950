//! weighted.rs
//! Wraps an undirected `petgraph` graph with scalar edge weights.

use super::node::{NodeId, NodeMetadata};
use petgraph::graph::{EdgeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// A unique identifier for an edge within the graph.
pub type EdgeId = EdgeIndex;

/// An undirected graph whose edges carry a non-negative weight.
///
/// Nodes and edges are append-only: there is no removal API, so `NodeId`
/// values stay contiguous (0..N) and remain valid for the lifetime of the
/// graph. The solver relies on this when it mirrors the node set into the
/// result tree.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    pub(crate) graph: UnGraph<NodeMetadata, f64>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, meta: NodeMetadata) -> NodeId {
        self.graph.add_node(meta)
    }

    /// Adds an undirected edge between two existing nodes.
    ///
    /// The caller is expected not to add self-loops or parallel edges; the
    /// validation pass rejects malformed weights before any solve.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> EdgeId {
        self.graph.add_edge(a, b, weight)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over all edges as `(source, target, weight)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source(), e.target(), *e.weight()))
    }

    // --- Accessors ---
    pub fn node_meta(&self, id: NodeId) -> &NodeMetadata {
        &self.graph[id]
    }

    pub fn graph(&self) -> &UnGraph<NodeMetadata, f64> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_report_original_weights() {
        let mut g = WeightedGraph::new();
        let a = g.add_node(NodeMetadata::named("A"));
        let b = g.add_node(NodeMetadata::named("B"));
        g.add_edge(a, b, 2.5);

        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(a, b, 2.5)]);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_node_ids_are_contiguous() {
        let mut g = WeightedGraph::new();
        for i in 0..4 {
            let id = g.add_node(NodeMetadata::named(format!("n{}", i)));
            assert_eq!(id.index(), i);
        }
    }
}
