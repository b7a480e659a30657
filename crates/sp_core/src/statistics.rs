use std::{
    fmt::{Debug, Display},
    time::{Duration, Instant},
};

/// Bookkeeping for a single search run.
#[derive(Debug, Default)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
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
            "Stats: {} nodes settled in {:?}",
            self.nodes_settled, self.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{graph::node_index, search::dijkstra::Dijkstra, util::test_graphs::sample_graph};

    #[test]
    fn stats_work() {
        let g = sample_graph();

        let mut d = Dijkstra::new(&g);
        d.search(node_index(0), node_index(5)).unwrap();

        assert!(d.stats.duration.is_some());
        // Every node except the target is settled before 6 is popped.
        assert_eq!(d.stats.nodes_settled, 5);
    }
}
