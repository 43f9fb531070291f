use anyhow::ensure;
use log::{debug, info};

use crate::constants::{Distance, Weight};
use crate::graph::*;
use crate::priority_queue::{HeapItem, PriorityQueue};
use crate::search::distance_table::DistanceTable;
use crate::statistics::SearchStats;

/// Distance of a node that has not been reached.
///
/// A shortest path has less than `u32::MAX` edges of at most `Weight::MAX` each,
/// so no real path length reaches this value.
pub const UNREACHABLE: Distance = Distance::MAX;

/// Single source Dijkstra on a [`Graph`] with non-negative weights.
///
/// Entries in the queue are never updated in place. A node is pushed again
/// whenever a shorter distance is found, outdated entries are skipped when popped.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
    settled: Vec<HeapItem>,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
            settled: Vec::new(),
        }
    }

    /// Computes the distance from `source` to every node of the graph.
    ///
    /// **Panics** if `source` is not a node of the graph
    pub fn search(&mut self, source: NodeIndex) -> DistanceTable {
        assert!(
            self.g.contains(source),
            "Source node index ({}) does not exist",
            source
        );
        self.run(source, None)
    }

    /// Same as [`Dijkstra::search`] but returns an error for an unknown `source`.
    pub fn try_search(&mut self, source: NodeIndex) -> anyhow::Result<DistanceTable> {
        ensure!(
            self.g.contains(source),
            "Source node index ({}) does not exist, graph has {} nodes",
            source,
            self.g.num_nodes()
        );
        Ok(self.run(source, None))
    }

    /// Distance from `source` to `target`. Stops as soon as `target` is settled.
    ///
    /// **Panics** if `source` or `target` is not a node of the graph
    pub fn distance(&mut self, source: NodeIndex, target: NodeIndex) -> Option<Distance> {
        assert!(
            self.g.contains(source),
            "Source node index ({}) does not exist",
            source
        );
        assert!(
            self.g.contains(target),
            "Target node index ({}) does not exist",
            target
        );
        self.run(source, Some(target)).get(target)
    }

    /// Nodes settled by the last run, in the order they were settled, with their final distance.
    pub fn settle_order(&self) -> &[HeapItem] {
        &self.settled
    }

    fn run(&mut self, source: NodeIndex, target: Option<NodeIndex>) -> DistanceTable {
        self.stats.init();
        self.settled.clear();
        debug!("Search from {} on {} nodes", source, self.g.num_nodes());

        let mut distances = DistanceTable::new(self.g.num_nodes(), source);
        let mut queue = PriorityQueue::new();

        queue.push(HeapItem::new(0, source));

        while let Some(item) = queue.pop() {
            let HeapItem { distance, node } = item;

            if distance > distances[node] {
                self.stats.stale_entries += 1;
                continue;
            }

            self.stats.nodes_settled += 1;
            self.settled.push(item);

            if target == Some(node) {
                break;
            }

            for edge in self.g.neighbors(node) {
                let new_distance = distance + Distance::from(edge.weight);
                if distances.improve(edge.target, new_distance) {
                    self.stats.edges_relaxed += 1;
                    queue.push(HeapItem::new(new_distance, edge.target));
                }
            }
        }
        self.stats.finish();

        info!(
            "Search from {} finished: {:?}/{} nodes settled",
            source,
            self.stats.duration.unwrap_or_default(),
            self.stats.nodes_settled
        );

        distances
    }
}

/// Runs a single source search from `source` on `graph`.
///
/// **Panics** if `source` is not a node of the graph
pub fn shortest_distances(graph: &Graph, source: NodeIndex) -> DistanceTable {
    Dijkstra::new(graph).search(source)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::util::test_graphs::{
        generate_complex_graph, generate_simple_graph, graph_from_triples,
    };

    use super::*;

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn assert_distances(expected: &[Option<Distance>], table: &DistanceTable) {
        let actual: Vec<Option<Distance>> = table.iter().map(|(_, d)| d).collect();
        assert_eq!(expected, actual.as_slice());
    }

    /// Shortest distances by enumerating every simple path starting at `source`.
    fn brute_force(g: &Graph, source: NodeIndex) -> Vec<Option<Distance>> {
        fn visit(
            g: &Graph,
            node: NodeIndex,
            length: Distance,
            on_path: &mut Vec<bool>,
            best: &mut Vec<Option<Distance>>,
        ) {
            let known = &mut best[node.index()];
            if known.map_or(true, |d| length < d) {
                *known = Some(length);
            }
            on_path[node.index()] = true;
            for edge in g.neighbors(node) {
                if !on_path[edge.target.index()] {
                    visit(
                        g,
                        edge.target,
                        length + Distance::from(edge.weight),
                        on_path,
                        best,
                    );
                }
            }
            on_path[node.index()] = false;
        }

        let mut best = vec![None; g.num_nodes()];
        let mut on_path = vec![false; g.num_nodes()];
        visit(g, source, 0, &mut on_path, &mut best);
        best
    }

    #[test]
    fn single_node() {
        let g = graph_from_triples(1, &[]);
        let table = shortest_distances(&g, node_index(0));

        assert_distances(&[Some(0)], &table);
    }

    #[test]
    fn detour_is_shorter() {
        let g = graph_from_triples(3, &[(0, 1, 4), (0, 2, 1), (2, 1, 1)]);
        let table = shortest_distances(&g, node_index(0));

        assert_distances(&[Some(0), Some(2), Some(1)], &table);
    }

    #[test]
    fn no_incoming_path() {
        let g = graph_from_triples(3, &[(0, 1, 5)]);
        let table = shortest_distances(&g, node_index(0));

        assert_distances(&[Some(0), Some(5), None], &table);
        assert_eq!(table[node_index(2)], UNREACHABLE);
    }

    #[test]
    fn disconnected_graph() {
        // 0 -> 1
        // 2 -> 3
        let g = graph_from_triples(4, &[(0, 1, 1), (2, 3, 1)]);
        let table = shortest_distances(&g, node_index(0));

        assert_distances(&[Some(0), Some(1), None, None], &table);
        assert_eq!(table.reachable_count(), 2);
    }

    #[test]
    fn cheaper_parallel_edge() {
        let g = graph_from_triples(2, &[(0, 1, 10), (0, 1, 3)]);
        let table = shortest_distances(&g, node_index(0));

        assert_eq!(table.get(node_index(1)), Some(3));
    }

    #[test]
    fn zero_weight_edges() {
        let g = graph_from_triples(3, &[(0, 1, 0), (1, 2, 0), (2, 0, 0)]);
        let table = shortest_distances(&g, node_index(1));

        assert_distances(&[Some(0), Some(0), Some(0)], &table);
    }

    #[test]
    fn go_around() {
        // 0 -> 1
        // |    |
        // 2 -> 3
        let g = graph_from_triples(4, &[(0, 1, 10), (0, 2, 1), (2, 3, 1), (3, 1, 1)]);
        let mut d = Dijkstra::new(&g);

        assert_distances(&[Some(0), Some(3), Some(1), Some(2)], &d.search(node_index(0)));
        assert_distances(&[None, Some(0), None, None], &d.search(node_index(1)));
    }

    #[test]
    fn search_on_simple_graph() {
        //           B
        //           |
        // E -> A -> C
        //      |  /
        //      D
        init_log();
        let g = generate_simple_graph();
        let mut d = Dijkstra::new(&g);

        assert_distances(
            &[Some(1), Some(3), Some(2), Some(2), Some(0)],
            &d.search(node_index(4)),
        );
        assert_distances(
            &[None, Some(1), Some(0), Some(1), None],
            &d.search(node_index(2)),
        );
    }

    #[test]
    fn search_on_complex_graph() {
        init_log();
        let g = generate_complex_graph();
        let table = shortest_distances(&g, node_index(1)); // B

        // A  B  C  D  E   F   G   H  I  J  K
        assert_distances(
            &[
                Some(3),
                Some(0),
                Some(3),
                Some(5),
                Some(8),
                Some(9),
                Some(10),
                Some(7),
                Some(9),
                Some(5),
                Some(6),
            ],
            &table,
        );
    }

    #[test]
    fn distance_to_target() {
        init_log();
        let g = generate_complex_graph();
        let mut d = Dijkstra::new(&g);

        assert_eq!(d.distance(node_index(1), node_index(6)), Some(10)); // B -> G
        assert_eq!(d.distance(node_index(4), node_index(4)), Some(0));
        assert_eq!(d.stats.nodes_settled, 1);

        let g = graph_from_triples(3, &[(0, 1, 5)]);
        let mut d = Dijkstra::new(&g);
        assert_eq!(d.distance(node_index(0), node_index(2)), None);
    }

    #[test]
    fn distance_stops_at_target() {
        // 0 -> 1 -> 2 -> 3
        let g = graph_from_triples(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1)]);
        let mut d = Dijkstra::new(&g);

        assert_eq!(d.distance(node_index(0), node_index(1)), Some(1));
        assert_eq!(d.stats.nodes_settled, 2);
    }

    #[test]
    fn try_search_unknown_source() {
        let g = graph_from_triples(2, &[(0, 1, 1)]);
        let mut d = Dijkstra::new(&g);

        assert!(d.try_search(node_index(2)).is_err());
        assert!(d.try_search(node_index(1)).is_ok());
    }

    #[test]
    #[should_panic(expected = "Source node index (7) does not exist")]
    fn search_unknown_source() {
        let g = graph_from_triples(2, &[]);
        shortest_distances(&g, node_index(7));
    }

    #[test]
    fn maximal_edge_weight_is_reachable() {
        let g = graph_from_triples(2, &[(0, 1, Weight::MAX)]);
        let table = shortest_distances(&g, node_index(0));

        assert_distances(&[Some(0), Some(Distance::from(Weight::MAX))], &table);
    }

    #[test]
    fn long_paths_do_not_overflow() {
        let g = graph_from_triples(3, &[(0, 1, Weight::MAX - 1), (1, 2, 5)]);
        let table = shortest_distances(&g, node_index(0));

        let first = Distance::from(Weight::MAX - 1);
        assert_distances(&[Some(0), Some(first), Some(first + 5)], &table);
    }

    #[test]
    fn chain_of_maximal_weights() {
        let num_nodes = 64;
        let triples: Vec<_> = (0..num_nodes - 1)
            .map(|i| (i, i + 1, Weight::MAX))
            .collect();
        let g = graph_from_triples(num_nodes, &triples);
        let table = shortest_distances(&g, node_index(0));

        let last = node_index(num_nodes - 1);
        assert_eq!(
            table.get(last),
            Some(Distance::from(Weight::MAX) * (num_nodes as Distance - 1))
        );
        assert_eq!(table.reachable_count(), num_nodes);
    }

    #[test]
    fn settled_distances_are_final() {
        let g = generate_complex_graph();
        let mut d = Dijkstra::new(&g);
        let table = d.search(node_index(0));

        let order = d.settle_order();
        assert_eq!(order.len(), g.num_nodes());
        for pair in order.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
        for item in order {
            assert_eq!(table.get(item.node), Some(item.distance));
        }
    }

    #[test]
    fn search_is_idempotent() {
        let g = generate_complex_graph();
        let num_nodes = g.num_nodes();

        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&(0..num_nodes), |source| {
                let mut d = Dijkstra::new(&g);
                let first = d.search(node_index(source));
                let second = d.search(node_index(source));
                prop_assert_eq!(first, second);
                Ok(())
            })
            .unwrap();
    }

    fn small_graph() -> impl Strategy<Value = (Graph, NodeIndex)> {
        (1usize..7).prop_flat_map(|num_nodes| {
            (
                prop::collection::vec((0..num_nodes, 0..num_nodes, 0..20 as Weight), 0..16),
                0..num_nodes,
            )
                .prop_map(move |(triples, source)| {
                    (graph_from_triples(num_nodes, &triples), node_index(source))
                })
        })
    }

    proptest! {
        #[test]
        fn matches_brute_force((g, source) in small_graph()) {
            let mut d = Dijkstra::new(&g);
            let table = d.search(source);

            prop_assert_eq!(table.get(source), Some(0));

            let expected = brute_force(&g, source);
            let actual: Vec<Option<Distance>> = table.iter().map(|(_, d)| d).collect();
            prop_assert_eq!(expected, actual);

            for item in d.settle_order() {
                prop_assert_eq!(table.get(item.node), Some(item.distance));
            }
        }
    }
}
