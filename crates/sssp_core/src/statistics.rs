use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::graph::Graph;

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_settled: usize,
    /// Queue entries popped after a shorter distance to their node was found
    pub stale_entries: usize,
    /// Number of successful relaxations
    pub edges_relaxed: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.stale_entries = 0;
        self.edges_relaxed = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled, {} stale entries skipped, {} edges relaxed in {:?}",
            self.nodes_settled, self.stale_entries, self.edges_relaxed, self.duration
        )
    }
}

pub fn average_out_degree(g: &Graph) -> f64 {
    if g.num_nodes() == 0 {
        return 0.0;
    }
    g.num_edges() as f64 / g.num_nodes() as f64
}

pub fn max_out_degree(g: &Graph) -> usize {
    g.nodes()
        .map(|node| g.neighbors(node).len())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::node_index,
        search::dijkstra::Dijkstra,
        statistics::{average_out_degree, max_out_degree},
        util::test_graphs::{generate_simple_graph, graph_from_triples},
    };

    #[test]
    fn stats_work() {
        //      7 -> 8 -> 9
        //      |         |
        // 0 -> 5 -> 6 -  |
        // |         |  \ |
        // 1 -> 2 -> 3 -> 4
        let g = graph_from_triples(
            10,
            &[
                (0, 1, 1),
                (1, 2, 1),
                (2, 3, 1),
                (3, 4, 20),
                (0, 5, 5),
                (5, 6, 1),
                (6, 4, 20),
                (6, 3, 20),
                (5, 7, 5),
                (7, 8, 1),
                (8, 9, 1),
                (9, 4, 1),
            ],
        );

        let mut d = Dijkstra::new(&g);
        d.search(node_index(0));

        assert_eq!(d.stats.nodes_settled, 10);
        // 4 is improved once after its first discovery via 3
        assert_eq!(d.stats.edges_relaxed, 10);
        assert_eq!(d.stats.stale_entries, 1);
        assert!(d.stats.duration.is_some());

        // Stats are reset between runs
        d.search(node_index(4));
        assert_eq!(d.stats.nodes_settled, 1);
        assert_eq!(d.stats.edges_relaxed, 0);
        assert_eq!(d.stats.stale_entries, 0);
    }

    #[test]
    fn degrees() {
        let g = generate_simple_graph();
        assert_eq!(average_out_degree(&g), 7.0 / 5.0);
        assert_eq!(max_out_degree(&g), 2);

        let empty = graph_from_triples(0, &[]);
        assert_eq!(average_out_degree(&empty), 0.0);
        assert_eq!(max_out_degree(&empty), 0);
    }
}
