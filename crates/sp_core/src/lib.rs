//! Shortest-path queries on weighted, directed graphs.
//!
//! The graph is an arena of nodes and edges addressed by index; the search
//! is a label-setting Dijkstra that reconstructs the explicit node sequence
//! of one shortest path. Edge weights must be non-negative.
//!
//! # Basic usage
//! ```
//! use sp_core::prelude::*;
//!
//! let mut g = Graph::new();
//! let a = g.add_node(Node::new(1));
//! let b = g.add_node(Node::new(2));
//! let c = g.add_node(Node::new(3));
//!
//! g.add_edge(Edge::new(a, b, 1.0));
//! g.add_edge(Edge::new(b, c, 1.0));
//! g.add_edge(Edge::new(a, c, 3.0));
//!
//! let mut dijkstra = Dijkstra::new(&g);
//! let sp = dijkstra.search(a, c).unwrap().expect("c is reachable");
//!
//! assert_eq!(vec![a, b, c], sp.nodes);
//! assert_eq!(2.0, sp.weight);
//! ```
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
