//! Crate to compute single source shortest path distances on directed graphs
//! with non-negative integer weights.
//!
//! # Basic usage
//! ```
//! use sssp_core::prelude::*;
//!
//! // Build a graph with 3 nodes
//! let g = Graph::from_edges(3, [(0, 1, 4), (0, 2, 1), (2, 1, 1)].map(Edge::from))
//!     .expect("Failed to build graph");
//!
//! // Run Dijkstra from node 0
//! let distances = shortest_distances(&g, node_index(0));
//!
//! assert_eq!(distances.get(node_index(1)), Some(2));
//! assert_eq!(distances.get(node_index(2)), Some(1));
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod graph;
pub mod prelude;
pub mod priority_queue;
pub mod search;
pub mod statistics;
pub mod util;
