use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::error::SearchError;
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;
use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

/// Entry of the frontier. Ordered by weight only, reversed so that
/// `BinaryHeap` behaves as a min-heap.
#[derive(Debug)]
struct Candidate {
    node_idx: NodeIndex,
    weight: Weight,
}

impl Candidate {
    fn new(node_idx: NodeIndex, weight: Weight) -> Self {
        Self { node_idx, weight }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        other.weight.partial_cmp(&self.weight)
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        other.weight == self.weight
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

/// Label-setting Dijkstra search over a borrowed [`Graph`].
///
/// The frontier tolerates duplicate entries for the same node instead of
/// using a decrease-key operation; stale entries are recognized and skipped
/// when popped. Once a node is popped as the minimum its distance is final,
/// which licenses the early exit as soon as the target is popped.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Runs a shortest-path query from `source` to `target`.
    ///
    /// Returns `Ok(Some(path))` with the node sequence
    /// `[source, ..., target]` and its total weight, `Ok(None)` if the
    /// target is unreachable, or [`SearchError::UnknownNode`] if either
    /// endpoint does not exist in the graph.
    pub fn search(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<Option<ShortestPath>, SearchError> {
        if !self.g.contains_node(source) {
            return Err(SearchError::UnknownNode(source));
        }
        if !self.g.contains_node(target) {
            return Err(SearchError::UnknownNode(target));
        }

        self.stats.init();

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Ok(Some(ShortestPath::new(vec![source], 0.0)));
        }

        let mut node_data: FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)> = FxHashMap::default();
        node_data.insert(source, (0.0, None));

        let mut settled: FxHashSet<NodeIndex> = FxHashSet::default();

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0.0));

        while let Some(Candidate { weight, node_idx }) = queue.pop() {
            if node_idx == target {
                // Popped as the minimum, so `weight` is final.
                break;
            }

            // A node can sit in the queue several times at different
            // weights. Only the first pop settles it; later pops are stale.
            if !settled.insert(node_idx) {
                continue;
            }
            self.stats.nodes_settled += 1;

            for edge in self.g.neighbors_outgoing(node_idx) {
                if settled.contains(&edge.target) {
                    continue;
                }

                let new_distance = weight + edge.weight;
                if new_distance
                    < node_data
                        .get(&edge.target)
                        .unwrap_or(&(Weight::INFINITY, None))
                        .0
                {
                    node_data.insert(edge.target, (new_distance, Some(node_idx)));
                    queue.push(Candidate::new(edge.target, new_distance));
                }
            }
        }
        self.stats.finish();

        let sp = super::reconstruct_path(target, source, &node_data);
        if sp.is_some() {
            debug!("Path found: {:?}", sp);
            info!("Path found: {}", self.stats);
        } else {
            info!("No path found: {}", self.stats);
        }

        Ok(sp)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::error::SearchError;
    use crate::search::{assert_no_path, assert_path};
    use crate::util::test_graphs::{complex_graph, sample_graph};
    use crate::{edge, node};

    use super::*;

    #[test]
    fn sample_route_beats_direct_edge() {
        // Ids 1..6 live at indices 0..5. The direct edge 1 -> 3 costs 4,
        // the detour over 2 and 4 costs 3.
        let g = sample_graph();
        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 1, 3, 2], 3.0, d.search(node_index(0), node_index(2)));
    }

    #[test]
    fn source_equals_target() {
        let g = sample_graph();
        let mut d = Dijkstra::new(&g);

        assert_path(vec![2], 0.0, d.search(node_index(2), node_index(2)));
    }

    #[test]
    fn unreachable_target() {
        // 0 -> 1 -> 2    3 (isolated)
        let mut g = Graph::new();
        for i in 0..4 {
            g.add_node(node!(i));
        }
        g.add_edge(edge!(node_index(0) => node_index(1), 1.0));
        g.add_edge(edge!(node_index(1) => node_index(2), 1.0));

        let mut d = Dijkstra::new(&g);

        assert_no_path(d.search(node_index(0), node_index(3)));
        // Edges are directed, so the reverse direction is unreachable too.
        assert_no_path(d.search(node_index(2), node_index(0)));
        assert_path(vec![0, 1, 2], 2.0, d.search(node_index(0), node_index(2)));
    }

    #[test]
    fn unknown_node_is_an_error() {
        let g = sample_graph();
        let mut d = Dijkstra::new(&g);

        assert_eq!(
            Err(SearchError::UnknownNode(node_index(42))),
            d.search(node_index(0), node_index(42))
        );
        assert_eq!(
            Err(SearchError::UnknownNode(node_index(42))),
            d.search(node_index(42), node_index(0))
        );
    }

    #[test]
    fn self_loop_is_inert() {
        // 0 -> 1 -> 2 with a loop at 1
        let mut g = Graph::new();
        for i in 0..3 {
            g.add_node(node!(i));
        }
        g.add_edge(edge!(node_index(0) => node_index(1), 1.0));
        g.add_edge(edge!(node_index(1) => node_index(1), 0.0));
        g.add_edge(edge!(node_index(1) => node_index(2), 1.0));

        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 1, 2], 2.0, d.search(node_index(0), node_index(2)));
        assert_path(vec![0, 1], 1.0, d.search(node_index(0), node_index(1)));
    }

    #[test]
    fn cheaper_parallel_edge_wins() {
        let mut g = Graph::new();
        let a = g.add_node(node!(0));
        let b = g.add_node(node!(1));
        g.add_edge(edge!(a => b, 5.0));
        g.add_edge(edge!(a => b, 2.0));

        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 1], 2.0, d.search(a, b));
    }

    #[test]
    fn repeated_queries_are_stable() {
        let g = complex_graph();
        let mut d = Dijkstra::new(&g);

        let first = d.search(node_index(0), node_index(7)).unwrap().unwrap();
        let second = d.search(node_index(0), node_index(7)).unwrap().unwrap();

        assert_eq!(first, second);
    }

    /// Minimal total weight over all simple paths, or `None` if the target
    /// cannot be reached. Exponential, only for tiny test graphs.
    fn brute_force(g: &Graph, source: NodeIndex, target: NodeIndex) -> Option<Weight> {
        fn visit(
            g: &Graph,
            node: NodeIndex,
            target: NodeIndex,
            weight: Weight,
            visited: &mut Vec<NodeIndex>,
            best: &mut Option<Weight>,
        ) {
            if node == target {
                if best.map_or(true, |b| weight < b) {
                    *best = Some(weight);
                }
                return;
            }
            for edge in g.neighbors_outgoing(node) {
                if visited.contains(&edge.target) {
                    continue;
                }
                visited.push(edge.target);
                visit(g, edge.target, target, weight + edge.weight, visited, best);
                visited.pop();
            }
        }

        let mut best = None;
        let mut visited = vec![source];
        visit(g, source, target, 0.0, &mut visited, &mut best);
        best
    }

    #[test]
    fn matches_brute_force_on_all_pairs() {
        let g = complex_graph();
        let num_nodes = g.nodes.len();

        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&(0..num_nodes, 0..num_nodes), |(a, b)| {
                let source = node_index(a);
                let target = node_index(b);

                let sp = Dijkstra::new(&g).search(source, target).unwrap();
                let expected = brute_force(&g, source, target);

                match (sp, expected) {
                    (Some(sp), Some(expected)) => {
                        assert_relative_eq!(sp.weight, expected);
                        assert_eq!(sp.nodes.first(), Some(&source));
                        assert_eq!(sp.nodes.last(), Some(&target));

                        // The reported weight must match the edges walked.
                        let mut walked = 0.0;
                        for pair in sp.nodes.windows(2) {
                            let step = g
                                .neighbors_outgoing(pair[0])
                                .filter(|e| e.target == pair[1])
                                .map(|e| e.weight)
                                .fold(Weight::INFINITY, Weight::min);
                            walked += step;
                        }
                        assert_relative_eq!(sp.weight, walked);
                    }
                    (None, None) => {}
                    (sp, expected) => {
                        panic!("search found {:?}, brute force found {:?}", sp, expected)
                    }
                }
                Ok(())
            })
            .unwrap();
    }
}
