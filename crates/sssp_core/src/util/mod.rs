pub mod cli;
pub mod edge_list;
pub mod test_graphs;
