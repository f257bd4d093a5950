//! Serializable summary of a solve result, for export to JSON or similar.

use crate::solver::SpanningTree;
use serde::{Deserialize, Serialize};

/// One selected edge, identified by the node names from the input metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeReport {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// A flat, serializable view of a spanning tree. Not a stable wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeReport {
    pub edges: Vec<EdgeReport>,
    pub total_weight: f64,
}

impl TreeReport {
    pub fn from_tree(tree: &SpanningTree) -> Self {
        let edges = tree
            .edges()
            .into_iter()
            .map(|(source, target, weight)| EdgeReport {
                source: tree.node_meta(source).name.clone(),
                target: tree.node_meta(target).name.clone(),
                weight,
            })
            .collect();
        Self {
            edges,
            total_weight: tree.total_weight(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeMetadata;
    use crate::solver::{solve, SolverConfig};
    use crate::WeightedGraph;

    #[test]
    fn test_report_round_trips_through_json() {
        let mut g = WeightedGraph::new();
        let a = g.add_node(NodeMetadata::named("hall"));
        let b = g.add_node(NodeMetadata::named("vault"));
        g.add_edge(a, b, 2.0);

        let tree = solve(&g, &SolverConfig::default()).expect("solve failed");
        let report = TreeReport::from_tree(&tree);
        assert_eq!(report.total_weight, 2.0);
        assert_eq!(report.edges.len(), 1);
        assert_eq!(report.edges[0].source, "hall");
        assert_eq!(report.edges[0].target, "vault");

        let json = serde_json::to_string(&report).expect("serialize");
        let back: TreeReport = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, report);
    }
}
