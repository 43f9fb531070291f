pub mod dijkstra;
pub mod distance_table;

pub use dijkstra::{shortest_distances, Dijkstra, UNREACHABLE};
pub use distance_table::DistanceTable;
