//! maxspan - maximum-weight spanning trees via mixed-integer linear programming.
//!
//! Instead of a greedy algorithm (Prim/Kruskal), the spanning tree is found by
//! encoding the problem as a MILP: one binary selection variable per edge, a
//! cardinality constraint fixing the tree to N-1 edges, and a single-commodity
//! flow model that certifies connectivity of the selected subgraph. A connected
//! subgraph with exactly N-1 edges is necessarily acyclic, so no explicit
//! subtour-elimination constraints are needed.
//!
//! The MILP itself is handed to an embedded generic solver (`good_lp` with the
//! `microlp` backend); this crate only builds the model and decodes the result.

pub mod analysis;
pub mod display;
pub mod graph;
pub mod solver;
pub mod validation;

pub use graph::{NodeId, NodeMetadata, WeightedGraph};
pub use solver::{solve, solve_all, SolveError, SolverConfig, SpanningTree};
