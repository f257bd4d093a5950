//! Diagnostic textual dump of the selected edges.
//!
//! The format is for human inspection only (1-indexed node numbers, one
//! edge per line); it is not a stable machine interface.

use crate::solver::SpanningTree;
use std::fmt::Write;

/// Formats the selected edges of `tree`, one per line.
pub fn format_selected_edges(tree: &SpanningTree) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Edges in the spanning tree:");
    for (source, target, weight) in tree.edges() {
        let _ = writeln!(
            output,
            "Edge ({}, {}) with weight {}",
            source.index() + 1,
            target.index() + 1,
            weight
        );
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeMetadata;
    use crate::solver::{solve, SolverConfig};
    use crate::WeightedGraph;

    #[test]
    fn test_dump_is_one_indexed() {
        let mut g = WeightedGraph::new();
        let a = g.add_node(NodeMetadata::named("a"));
        let b = g.add_node(NodeMetadata::named("b"));
        g.add_edge(a, b, 4.0);

        let tree = solve(&g, &SolverConfig::default()).expect("solve failed");
        let dump = format_selected_edges(&tree);
        assert!(dump.starts_with("Edges in the spanning tree:\n"));
        assert!(dump.contains("Edge (1, 2) with weight 4"));
    }
}
