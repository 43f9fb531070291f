//! Plain text graph input.
//!
//! The format is a sequence of whitespace separated integers:
//! `V E`, followed by `E` edges `u v w`, followed by the source node.
//!
//! ```text
//! 3 3
//! 0 1 4
//! 0 2 1
//! 2 1 1
//! 0
//! ```
use std::{io::Read, str::FromStr};

use anyhow::{bail, ensure, Context};
use log::debug;

use crate::{
    constants::Weight,
    graph::{Edge, Graph, NodeIndex},
};

#[derive(Debug)]
pub struct EdgeListInput {
    pub graph: Graph,
    pub source: NodeIndex,
}

pub fn parse_edge_list(input: &str) -> anyhow::Result<EdgeListInput> {
    let mut tokens = input.split_whitespace();

    let num_nodes: usize = next_number(&mut tokens, "number of vertices")?;
    let num_edges: usize = next_number(&mut tokens, "number of edges")?;

    let mut edges = Vec::with_capacity(num_edges.min(1 << 16));
    for i in 0..num_edges {
        let source = next_node(&mut tokens, "edge source")
            .with_context(|| format!("Failed to read edge #{}", i))?;
        let target = next_node(&mut tokens, "edge target")
            .with_context(|| format!("Failed to read edge #{}", i))?;
        let weight: Weight = next_number(&mut tokens, "edge weight")
            .with_context(|| format!("Failed to read edge #{}", i))?;
        edges.push(Edge::new(source, target, weight));
    }

    let source = next_node(&mut tokens, "source vertex")?;

    if let Some(token) = tokens.next() {
        bail!("Unexpected trailing input: {:?}", token);
    }

    let graph = Graph::from_edges(num_nodes, edges)?;
    ensure!(
        graph.contains(source),
        "Source vertex ({}) does not exist, graph has {} nodes",
        source,
        graph.num_nodes()
    );

    debug!(
        "Parsed {} nodes, {} edges, source {}",
        graph.num_nodes(),
        graph.num_edges(),
        source
    );

    Ok(EdgeListInput { graph, source })
}

pub fn read_edge_list<R: Read>(mut reader: R) -> anyhow::Result<EdgeListInput> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("Failed to read edge list")?;
    parse_edge_list(&input)
}

fn next_number<'a, T>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let token = tokens
        .next()
        .with_context(|| format!("Missing {}", what))?;
    token
        .parse()
        .with_context(|| format!("Invalid {}: {:?}", what, token))
}

fn next_node<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> anyhow::Result<NodeIndex> {
    let index: usize = next_number(tokens, what)?;
    NodeIndex::try_new(index).with_context(|| format!("Invalid {}", what))
}
