use crate::{
    constants::Weight,
    edge,
    graph::{Edge, Graph},
};

/// Builds a graph from `(source, target, weight)` triples.
///
/// **Panics** if a triple references a node outside of `[0, num_nodes)`
pub fn graph_from_triples(num_nodes: usize, triples: &[(usize, usize, Weight)]) -> Graph {
    let mut g = Graph::new(num_nodes);
    for &triple in triples {
        g.add_edge(Edge::from(triple));
    }
    g
}

pub fn generate_complex_graph() -> Graph {
    let mut graph = Graph::default();

    let a = graph.add_node();
    let b = graph.add_node();
    let c = graph.add_node();
    let d = graph.add_node();
    let e = graph.add_node();
    let f = graph.add_node();
    let g = graph.add_node();
    let h = graph.add_node();
    let i = graph.add_node();
    let j = graph.add_node();
    let k = graph.add_node();

    graph.add_edges(edge!(a, b, 3)); // A <=> B
    graph.add_edges(edge!(a, c, 5)); // A <=> C
    graph.add_edges(edge!(a, k, 3)); // A <=> K

    graph.add_edges(edge!(b, d, 5)); // B <=> D
    graph.add_edges(edge!(b, c, 3)); // B <=> C

    graph.add_edges(edge!(c, d, 2)); // C <=> D
    graph.add_edges(edge!(c, j, 2)); // C <=> J

    graph.add_edges(edge!(d, j, 4)); // D <=> J
    graph.add_edges(edge!(d, e, 7)); // D <=> E

    graph.add_edges(edge!(e, j, 3)); // E <=> J
    graph.add_edges(edge!(e, f, 6)); // E <=> F

    graph.add_edges(edge!(f, h, 2)); // F <=> H
    graph.add_edges(edge!(f, g, 4)); // F <=> G

    graph.add_edges(edge!(g, h, 3)); // G <=> H
    graph.add_edges(edge!(g, i, 5)); // G <=> I

    graph.add_edges(edge!(h, i, 3)); // H <=> I
    graph.add_edges(edge!(h, j, 2)); // H <=> J

    graph.add_edges(edge!(i, j, 4)); // I <=> J
    graph.add_edges(edge!(i, k, 6)); // I <=> K

    graph.add_edges(edge!(j, k, 3)); // J <=> K

    graph
}

pub fn generate_simple_graph() -> Graph {
    //           B
    //           |
    // E -> A -> C
    //      |  /
    //      D
    let mut g = Graph::default();

    let a = g.add_node();
    let b = g.add_node();
    let c = g.add_node();
    let d = g.add_node();
    let e = g.add_node();

    g.add_edge(edge!(a => c, 1));
    g.add_edge(edge!(a => d, 1));
    g.add_edge(edge!(e => a, 1));
    g.add_edges(edge!(c, b, 1));
    g.add_edges(edge!(c, d, 1));

    g
}
