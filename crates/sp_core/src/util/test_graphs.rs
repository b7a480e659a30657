use crate::{
    edge,
    graph::{node_index, Graph},
    node,
};

/// The six-node demo graph. Ids 1..6 live at indices 0..5.
///
/// 1 -> 2 (1)   1 -> 3 (4)
/// 2 -> 4 (1)   2 -> 5 (2)
/// 4 -> 3 (1)   4 -> 5 (2)
/// 5 -> 6 (1)   6 -> 2 (1)
///
/// The shortest route from 1 to 3 is 1, 2, 4, 3 with weight 3, beating the
/// direct edge of weight 4.
pub fn sample_graph() -> Graph {
    let mut g = Graph::new();

    for id in 1..=6 {
        g.add_node(node!(id));
    }

    g.add_edge(edge!(node_index(0) => node_index(1), 1.0)); // 1 -> 2
    g.add_edge(edge!(node_index(0) => node_index(2), 4.0)); // 1 -> 3
    g.add_edge(edge!(node_index(1) => node_index(3), 1.0)); // 2 -> 4
    g.add_edge(edge!(node_index(1) => node_index(4), 2.0)); // 2 -> 5
    g.add_edge(edge!(node_index(3) => node_index(2), 1.0)); // 4 -> 3
    g.add_edge(edge!(node_index(3) => node_index(4), 2.0)); // 4 -> 5
    g.add_edge(edge!(node_index(4) => node_index(5), 1.0)); // 5 -> 6
    g.add_edge(edge!(node_index(5) => node_index(1), 1.0)); // 6 -> 2

    g
}

/// A denser mixed graph for randomized tests: a bidirectional ring of six
/// nodes with two chords, a directed detour over 6, a sink 7 and a node 8
/// that reaches the ring but cannot be reached from it.
pub fn complex_graph() -> Graph {
    let mut g = Graph::new();

    for id in 0..9 {
        g.add_node(node!(id));
    }

    g.add_edges(edge!(node_index(0), node_index(1), 2.0));
    g.add_edges(edge!(node_index(1), node_index(2), 3.0));
    g.add_edges(edge!(node_index(2), node_index(3), 1.0));
    g.add_edges(edge!(node_index(3), node_index(4), 4.0));
    g.add_edges(edge!(node_index(4), node_index(5), 2.0));
    g.add_edges(edge!(node_index(5), node_index(0), 7.0));
    g.add_edges(edge!(node_index(1), node_index(4), 6.0));
    g.add_edges(edge!(node_index(2), node_index(5), 5.0));

    g.add_edge(edge!(node_index(3) => node_index(6), 2.0));
    g.add_edge(edge!(node_index(6) => node_index(0), 1.0));
    g.add_edge(edge!(node_index(6) => node_index(7), 3.0));
    g.add_edge(edge!(node_index(5) => node_index(7), 1.0));
    g.add_edge(edge!(node_index(8) => node_index(2), 1.0));

    g
}
