//! Defines the core data structures for the weighted input graph.
pub mod node;
pub mod weighted;

// Re-export key types for convenient access
pub use node::{NodeId, NodeMetadata};
pub use weighted::{EdgeId, WeightedGraph};
