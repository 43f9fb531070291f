use std::{fmt, ops::Index};

use crate::{
    constants::Distance,
    graph::{node_index, NodeIndex},
};

use super::UNREACHABLE;

/// Result of a single source search: one distance per node of the graph.
///
/// Nodes that cannot be reached from the source hold [`UNREACHABLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    source: NodeIndex,
    distances: Vec<Distance>,
}

impl DistanceTable {
    pub(crate) fn new(num_nodes: usize, source: NodeIndex) -> Self {
        let mut distances = vec![UNREACHABLE; num_nodes];
        distances[source.index()] = 0;
        DistanceTable { source, distances }
    }

    /// Stores `distance` for `node` if it is strictly shorter than the known one.
    pub(crate) fn improve(&mut self, node: NodeIndex, distance: Distance) -> bool {
        let known = &mut self.distances[node.index()];
        if distance < *known {
            *known = distance;
            true
        } else {
            false
        }
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance from the source to `node`, `None` if `node` is unreachable.
    ///
    /// **Panics** if `node` is not a node of the searched graph
    pub fn get(&self, node: NodeIndex) -> Option<Distance> {
        match self.distances[node.index()] {
            UNREACHABLE => None,
            distance => Some(distance),
        }
    }

    pub fn is_reachable(&self, node: NodeIndex) -> bool {
        self.get(node).is_some()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|&&d| d != UNREACHABLE).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, Option<Distance>)> + '_ {
        self.distances.iter().enumerate().map(|(i, &d)| {
            let distance = if d == UNREACHABLE { None } else { Some(d) };
            (node_index(i), distance)
        })
    }

    pub fn as_slice(&self) -> &[Distance] {
        &self.distances
    }

    pub fn into_inner(self) -> Vec<Distance> {
        self.distances
    }

    /// One human readable line per node.
    pub fn report_lines(&self) -> impl Iterator<Item = String> + '_ {
        let source = self.source;
        self.iter().map(move |(node, distance)| match distance {
            Some(d) => format!("Shortest distance from {} to {} is {}", source, node, d),
            None => format!("Vertex {} to {} is unreachable.", source, node),
        })
    }
}

impl Index<NodeIndex> for DistanceTable {
    type Output = Distance;

    fn index(&self, node: NodeIndex) -> &Self::Output {
        &self.distances[node.index()]
    }
}

impl fmt::Display for DistanceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.report_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
