use crate::constants::Weight;
use anyhow::{ensure, Context};
use log::{debug, info};
use serde::Deserialize;
use std::{fmt, path::Path};

/// Default integer typer for node indices
/// Needs to be increased vor very large graphs > u32::max
pub type DefaultIdx = u32;

/// Node identifier. Nodes are identified by their position in `[0, num_nodes)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    /// **Panics** if `x` does not fit into the index type
    #[inline]
    pub fn new(x: usize) -> Self {
        match DefaultIdx::try_from(x) {
            Ok(ix) => NodeIndex(ix),
            Err(_) => panic!(
                "Node index ({}) exceeds index type {}",
                x,
                std::any::type_name::<DefaultIdx>()
            ),
        }
    }

    /// Same as [`NodeIndex::new`] but returns an error if `x` does not fit into the index type.
    pub fn try_new(x: usize) -> anyhow::Result<Self> {
        let ix = DefaultIdx::try_from(x).with_context(|| {
            format!(
                "Node index ({}) exceeds index type {}",
                x,
                std::any::type_name::<DefaultIdx>()
            )
        })?;
        Ok(NodeIndex(ix))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// An invalid `NodeIndex`, never handed out by a [`Graph`].
    #[inline]
    pub fn end() -> Self {
        NodeIndex(DefaultIdx::MAX)
    }
}

impl From<DefaultIdx> for NodeIndex {
    fn from(ix: DefaultIdx) -> Self {
        NodeIndex(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Directed, weighted edge as it is handed to the graph during construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }
}

/// **Panics** if a node index does not fit into the index type
impl From<(usize, usize, Weight)> for Edge {
    fn from((source, target, weight): (usize, usize, Weight)) -> Self {
        Edge::new(node_index(source), node_index(target), weight)
    }
}

/// Entry of an adjacency list: the head of an outgoing edge and its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub target: NodeIndex,
    pub weight: Weight,
}

/// Directed graph stored as one adjacency list per node.
///
/// Parallel edges are kept as they are inserted; every one of them is
/// relaxed by a search.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) edges_out: Vec<Vec<Neighbor>>,
    num_edges: usize,
}

impl Graph {
    /// Creates a graph with `num_nodes` nodes and no edges.
    ///
    /// **Panics** if `num_nodes` exceeds the capacity of the index type
    pub fn new(num_nodes: usize) -> Self {
        assert!(
            num_nodes < NodeIndex::end().index(),
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        Self {
            edges_out: vec![Vec::new(); num_nodes],
            num_edges: 0,
        }
    }

    /// Builds a graph from `num_nodes` and a list of edges.
    ///
    /// Fails if any edge references a node outside of `[0, num_nodes)`.
    pub fn from_edges<I>(num_nodes: usize, edges: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        ensure!(
            num_nodes < NodeIndex::end().index(),
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        let mut g = Graph::new(num_nodes);
        for (i, edge) in edges.into_iter().enumerate() {
            g.try_add_edge(edge)
                .with_context(|| format!("Invalid edge #{}", i))?;
        }

        debug!(
            "Built graph with {} nodes and {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }

    /// Adds a new node without any edges and returns its index.
    ///
    /// **Panics** if the Graph is at the maximum number of nodes for its index
    /// type
    pub fn add_node(&mut self) -> NodeIndex {
        let node_idx = NodeIndex::new(self.edges_out.len());

        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.edges_out.push(Vec::new());

        node_idx
    }

    /// Add a new `edge` to the graph.
    ///
    /// **Panics** if the source or target node does not exist
    pub fn add_edge(&mut self, edge: Edge) {
        assert!(
            self.contains(edge.source),
            "Source node index ({}) does not exist",
            edge.source
        );
        assert!(
            self.contains(edge.target),
            "Target node index ({}) does not exist",
            edge.target
        );

        self.push_edge(edge);
    }

    /// Same as [`Graph::add_edge`] but returns an error instead of panicking.
    pub fn try_add_edge(&mut self, edge: Edge) -> anyhow::Result<()> {
        ensure!(
            self.contains(edge.source),
            "Source node index ({}) does not exist, graph has {} nodes",
            edge.source,
            self.num_nodes()
        );
        ensure!(
            self.contains(edge.target),
            "Target node index ({}) does not exist, graph has {} nodes",
            edge.target,
            self.num_nodes()
        );

        self.push_edge(edge);
        Ok(())
    }

    fn push_edge(&mut self, edge: Edge) {
        self.edges_out[edge.source.index()].push(Neighbor {
            target: edge.target,
            weight: edge.weight,
        });
        self.num_edges += 1;
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    pub fn contains(&self, node_idx: NodeIndex) -> bool {
        node_idx.index() < self.edges_out.len()
    }

    /// Outgoing edges of `node_idx` in insertion order.
    pub fn neighbors(&self, node_idx: NodeIndex) -> &[Neighbor] {
        &self.edges_out[node_idx.index()]
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.edges_out.len()).map(NodeIndex::new)
    }

    pub fn num_nodes(&self) -> usize {
        self.edges_out.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Reads an edge list with the header `source,target,weight`.
    ///
    /// If `num_nodes` is `None` the graph gets as many nodes as needed to hold
    /// the highest index found in the file.
    pub fn from_csv(path_to_edges: &Path, num_nodes: Option<usize>) -> anyhow::Result<Self> {
        info!("Reading edge list: {:?}", path_to_edges);

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path_to_edges)
            .with_context(|| format!("Could not open {:?}", path_to_edges))?;

        let mut edges: Vec<Edge> = Vec::new();
        for result in reader.deserialize() {
            let edge: Edge = result.context("Failed to parse Edge")?;
            edges.push(edge);
        }

        let num_nodes = num_nodes.unwrap_or_else(|| {
            edges
                .iter()
                .map(|edge| edge.source.index().max(edge.target.index()) + 1)
                .max()
                .unwrap_or(0)
        });

        let g = Graph::from_edges(num_nodes, edges)
            .with_context(|| format!("Invalid edge list {:?}", path_to_edges))?;

        info!(
            "Graph has {} nodes and {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }
}

/// Macro to create a edge from source to target with a weight
///
/// edge!(a , b, 3) Returns edge in both directions
///
/// edge!(a => b, 3) Returns directed edge
#[macro_export]
macro_rules! edge {
    ($source:expr => $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source, $target, $weight)
    };
    ($source:expr , $target:expr, $weight:expr) => {
        vec![
            $crate::graph::Edge::new($source, $target, $weight),
            $crate::graph::Edge::new($target, $source, $weight),
        ]
    };
}
