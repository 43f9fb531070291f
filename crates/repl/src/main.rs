//! Interactive shell to run searches on a graph loaded from a .csv edge list
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use sssp_core::{
    graph::{node_index, Graph, NodeIndex},
    search::Dijkstra,
    statistics::{average_out_degree, max_out_degree},
};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} nodes and {} edges (avg. out degree {:.2}, max. out degree {})",
        context.graph.num_nodes(),
        context.graph.num_edges(),
        average_out_degree(&context.graph),
        max_out_degree(&context.graph)
    )))
}

fn node_arg(
    args: &ArgMatches,
    name: &str,
    context: &Context,
) -> std::result::Result<NodeIndex, String> {
    let node = NodeIndex::try_new(*args.get_one::<usize>(name).unwrap())
        .map_err(|err| err.to_string())?;
    if context.graph.contains(node) {
        Ok(node)
    } else {
        Err(format!(
            "Node {} does not exist, graph has {} nodes",
            node,
            context.graph.num_nodes()
        ))
    }
}

fn run_sssp(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = match node_arg(&args, "src", context) {
        Ok(node) => node,
        Err(msg) => return Ok(Some(msg)),
    };

    let mut dijkstra = Dijkstra::new(&context.graph);
    let distances = dijkstra.search(src);

    let mut out = distances.to_string();
    out.push_str(&format!(
        "{} of {} nodes reachable\n{}",
        distances.reachable_count(),
        distances.len(),
        dijkstra.stats
    ));
    Ok(Some(out))
}

fn run_dist(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (src, dst) = match (
        node_arg(&args, "src", context),
        node_arg(&args, "dst", context),
    ) {
        (Ok(src), Ok(dst)) => (src, dst),
        (Err(msg), _) | (_, Err(msg)) => return Ok(Some(msg)),
    };

    let mut dijkstra = Dijkstra::new(&context.graph);
    let res = match dijkstra.distance(src, dst) {
        Some(d) => format!("Shortest distance from {} to {} is {}", src, dst, d),
        None => format!("Vertex {} to {} is unreachable.", src, dst),
    };

    Ok(Some(format!("{}\nTook: {:?}", res, dijkstra.stats.duration)))
}

fn measure_sssp(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);
    let num_nodes = context.graph.num_nodes();
    if num_nodes == 0 {
        return Ok(Some("Graph is empty".to_string()));
    }

    // Select n random source nodes
    let mut rng = rand::thread_rng();
    let src_nodes: Vec<NodeIndex> = (0..n)
        .map(|_| node_index(rng.gen_range(0..num_nodes)))
        .collect();

    let mut res = String::new();
    let bar = ProgressBar::new(n as u64);
    // Run Dijkstra for each source node
    for src in src_nodes {
        let mut dijkstra = Dijkstra::new(&context.graph);
        let distances = dijkstra.search(src);
        res.push_str(&format!(
            "{}: {} reachable, {:?}\n",
            src,
            distances.reachable_count(),
            dijkstra.stats.duration
        ));
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(Some(res))
}

#[derive(Default)]
struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

fn node_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .arg(
            Arg::new("src")
                .value_parser(value_parser!(usize))
                .required(true)
                .help("Index of source node"),
        )
        .about(about)
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph
    let Some(path_to_csv) = std::env::args().nth(1) else {
        eprintln!("Usage: repl <edges.csv>");
        std::process::exit(2);
    };
    let graph = match Graph::from_csv(Path::new(&path_to_csv), None) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(1);
        }
    };
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to run single source shortest path searches")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            node_command("sssp", "Distances from a source node to all nodes"),
            run_sssp,
        )
        .with_command(
            node_command("dist", "Distance between two nodes").arg(
                Arg::new("dst")
                    .value_parser(value_parser!(usize))
                    .required(true)
                    .help("Index of destination node"),
            ),
            run_dist,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random sources to search from"),
                )
                .about("Measure `n` searches from random sources"),
            measure_sssp,
        );

    repl.run()
}
