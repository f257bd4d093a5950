//! Defines node identity and the attributes carried alongside each node.

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A unique, stable identifier for a node within the graph.
///
/// This is a type alias for `petgraph::graph::NodeIndex` to abstract the
/// underlying graph implementation.
pub type NodeId = NodeIndex;

/// Attributes attached to a node, used for auditing and display.
///
/// The solver never interprets these; they are copied unchanged from the
/// input graph into the resulting tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMetadata {
    /// A human-readable name for the node (e.g., "Entrance Hall").
    pub name: String,
    /// Arbitrary key/value attributes supplied by the caller.
    pub attributes: BTreeMap<String, String>,
}

impl NodeMetadata {
    /// Convenience constructor for a node with a name and no attributes.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }
}
