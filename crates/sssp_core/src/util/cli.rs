use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to a .csv edge list (source,target,weight). Reads the plain text format from stdin if omitted
    edges_file: Option<String>,

    /// Number of nodes of the graph in the .csv file. Defaults to the highest index + 1
    #[arg(short, long, value_name = "count")]
    nodes: Option<usize>,

    /// Source node of the search. Overrides the source given in the plain text format
    #[arg(short, long, value_name = "node")]
    source: Option<usize>,

    /// Only compute the distance to this node
    #[arg(short, long, value_name = "node")]
    target: Option<usize>,

    /// Print search statistics
    #[arg(long, default_value = "false")]
    stats: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Csv {
        path: PathBuf,
        num_nodes: Option<usize>,
    },
    Stdin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cfg {
    pub input: Input,
    pub source: Option<usize>,
    pub target: Option<usize>,
    pub print_stats: bool,
}

pub fn parse() -> Cfg {
    from_cli(Cli::parse())
}

pub fn try_parse_from<I, T>(args: I) -> Result<Cfg, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map(from_cli)
}

fn from_cli(cli: Cli) -> Cfg {
    let input = match cli.edges_file {
        Some(path) => Input::Csv {
            path: PathBuf::from(path),
            num_nodes: cli.nodes,
        },
        None => Input::Stdin,
    };

    Cfg {
        input,
        source: cli.source,
        target: cli.target,
        print_stats: cli.stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_input() {
        let cfg = try_parse_from(["sssp", "edges.csv", "-n", "12", "--source", "3", "--stats"])
            .unwrap();

        assert_eq!(
            cfg.input,
            Input::Csv {
                path: PathBuf::from("edges.csv"),
                num_nodes: Some(12)
            }
        );
        assert_eq!(cfg.source, Some(3));
        assert_eq!(cfg.target, None);
        assert!(cfg.print_stats);
    }

    #[test]
    fn stdin_input() {
        let cfg = try_parse_from(["sssp", "-t", "2"]).unwrap();

        assert_eq!(cfg.input, Input::Stdin);
        assert_eq!(cfg.source, None);
        assert_eq!(cfg.target, Some(2));
        assert!(!cfg.print_stats);
    }

    #[test]
    fn rejects_negative_source() {
        assert!(try_parse_from(["sssp", "--source", "-1"]).is_err());
    }
}
