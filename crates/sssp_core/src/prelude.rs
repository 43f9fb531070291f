//! Re-exports of the most commonly used items in `sssp_core`.
pub use crate::search;
pub use crate::search::{shortest_distances, Dijkstra, DistanceTable, UNREACHABLE};

pub use crate::constants::{Distance, Weight};
pub use crate::graph::node_index;
pub use crate::graph::{Edge, Graph, NodeIndex};
pub use crate::util::edge_list::{parse_edge_list, read_edge_list, EdgeListInput};
