use std::io;

use anyhow::{bail, Context};
use log::info;
use sssp_core::{
    prelude::*,
    util::cli::{self, Input},
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let (graph, source) = match &cfg.input {
        Input::Csv { path, num_nodes } => {
            let graph = Graph::from_csv(path, *num_nodes)?;
            let Some(source) = cfg.source else {
                bail!("A source node (--source) is required for .csv input");
            };
            (graph, NodeIndex::try_new(source)?)
        }
        Input::Stdin => {
            info!("Reading graph from stdin");
            let EdgeListInput { graph, source } =
                read_edge_list(io::stdin().lock()).context("Could not read graph from stdin")?;
            let source = match cfg.source {
                Some(source) => NodeIndex::try_new(source)?,
                None => source,
            };
            (graph, source)
        }
    };

    let mut dijkstra = Dijkstra::new(&graph);

    match cfg.target {
        Some(target) => {
            let target = NodeIndex::try_new(target)?;
            for node in [source, target] {
                if !graph.contains(node) {
                    bail!(
                        "Node index ({}) does not exist, graph has {} nodes",
                        node,
                        graph.num_nodes()
                    );
                }
            }
            match dijkstra.distance(source, target) {
                Some(d) => println!("Shortest distance from {} to {} is {}", source, target, d),
                None => println!("Vertex {} to {} is unreachable.", source, target),
            }
        }
        None => {
            let distances = dijkstra.try_search(source)?;
            print!("{}", distances);
        }
    }

    if cfg.print_stats {
        println!("{}", dijkstra.stats);
    }

    Ok(())
}
