//! Structural checks over undirected graphs, independent of any solve.

use petgraph::graph::UnGraph;
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

/// Checks whether `graph` is a spanning tree of its own node set: exactly
/// N-1 edges, connected, acyclic.
///
/// Uses union-find: an edge whose endpoints already share a component
/// closes a cycle. An acyclic graph with N-1 edges has exactly one
/// component, so no separate connectivity pass is needed.
pub fn is_spanning_tree<N, E>(graph: &UnGraph<N, E>) -> bool {
    let node_count = graph.node_count();
    if node_count == 0 {
        return false;
    }
    if graph.edge_count() != node_count - 1 {
        return false;
    }

    let mut components = UnionFind::new(node_count);
    for edge in graph.edge_references() {
        if !components.union(edge.source().index(), edge.target().index()) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(nodes: usize, edges: &[(usize, usize)]) -> UnGraph<(), ()> {
        let mut g = UnGraph::new_undirected();
        let ids: Vec<_> = (0..nodes).map(|_| g.add_node(())).collect();
        for &(a, b) in edges {
            g.add_edge(ids[a], ids[b], ());
        }
        g
    }

    #[test]
    fn test_path_is_a_tree() {
        assert!(is_spanning_tree(&graph_with(4, &[(0, 1), (1, 2), (2, 3)])));
    }

    #[test]
    fn test_single_node_is_a_tree() {
        assert!(is_spanning_tree(&graph_with(1, &[])));
    }

    #[test]
    fn test_cycle_is_rejected() {
        assert!(!is_spanning_tree(&graph_with(3, &[(0, 1), (1, 2), (2, 0)])));
    }

    #[test]
    fn test_wrong_edge_count_is_rejected() {
        // Disconnected forest: 4 nodes, 2 edges.
        assert!(!is_spanning_tree(&graph_with(4, &[(0, 1), (2, 3)])));
    }

    #[test]
    fn test_cycle_plus_isolated_node_is_rejected() {
        // 4 nodes and 3 edges, but the edges form a triangle and leave
        // the fourth node disconnected.
        assert!(!is_spanning_tree(&graph_with(4, &[(0, 1), (1, 2), (2, 0)])));
    }

    #[test]
    fn test_empty_graph_is_rejected() {
        assert!(!is_spanning_tree(&graph_with(0, &[])));
    }
}
