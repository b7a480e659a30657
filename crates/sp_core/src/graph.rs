use crate::constants::{NodeId, Weight};
use serde::{Deserialize, Serialize};
use std::{fmt, hash::Hash};

/// Default integer type for node and edge indices.
/// Needs to be increased for very large graphs > u32::max
pub type DefaultIdx = u32;

pub trait IndexType: Copy + Default + Hash + Ord + fmt::Debug {
    fn new(idx: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

impl IndexType for usize {
    #[inline(always)]
    fn new(x: usize) -> Self {
        x
    }
    #[inline(always)]
    fn index(&self) -> Self {
        *self
    }
    #[inline(always)]
    fn max() -> Self {
        usize::MAX
    }
}

impl IndexType for u32 {
    #[inline(always)]
    fn new(x: usize) -> Self {
        x as u32
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self as usize
    }
    #[inline(always)]
    fn max() -> Self {
        u32::MAX
    }
}

/// Node identifier inside the graph arena. Edges refer to nodes only through
/// this index, never through references to the nodes themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex<Idx = DefaultIdx>(Idx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(IndexType::max())
    }
}

impl<Idx: IndexType> From<Idx> for NodeIndex<Idx> {
    fn from(ix: Idx) -> Self {
        NodeIndex(ix)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize,
)]
pub struct EdgeIndex<Idx = DefaultIdx>(Idx);

impl<Idx: IndexType> From<Idx> for EdgeIndex<Idx> {
    fn from(ix: Idx) -> Self {
        EdgeIndex(ix)
    }
}

impl<Idx: IndexType> EdgeIndex<Idx> {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    /// An invalid `EdgeIndex` used to denote absence of an edge.
    #[inline]
    pub fn end() -> Self {
        EdgeIndex(IndexType::max())
    }
}

/// A node of the graph. The `id` is a caller-supplied payload; the search
/// itself only works with [`NodeIndex`] values.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Node {
    pub id: NodeId,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Node { id }
    }
}

/// A directed edge with a finite, non-negative weight.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Edge<Idx = DefaultIdx> {
    pub source: NodeIndex<Idx>,
    pub target: NodeIndex<Idx>,
    pub weight: Weight,
}

impl Edge {
    pub fn new(
        source: NodeIndex<DefaultIdx>,
        target: NodeIndex<DefaultIdx>,
        weight: Weight,
    ) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }
}

/// Arena of nodes and edges with a forward adjacency list.
///
/// The graph owns all nodes and edges; searches only borrow it. Mutating the
/// graph while a search borrows it is rejected by the borrow checker.
#[derive(Clone, Serialize, Deserialize)]
pub struct Graph<Idx = DefaultIdx> {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge<Idx>>,
    pub edges_out: Vec<Vec<EdgeIndex<Idx>>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            edges_out: Vec::new(),
        }
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_edges),
            edges_out: Vec::with_capacity(num_nodes),
        }
    }

    /// Adds a new node to the graph and returns its index.
    ///
    /// **Panics** if the graph is at the maximum number of nodes for its
    /// index type
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        let node_idx: NodeIndex = NodeIndex::new(self.nodes.len());

        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        // Create new entry in adjacency list for new node
        self.edges_out.push(Vec::new());

        self.nodes.push(node);

        node_idx
    }

    /// Add a new `edge` to the graph.
    ///
    /// Parallel edges and self-loops are stored as-is; the search resolves
    /// parallel edges during relaxation, where the cheaper one wins.
    ///
    /// **Panics** if the graph is at the maximum number of edges for its
    /// index type
    /// **Panics** if the source or target node does not exist
    /// **Panics** if the weight is negative or not finite
    ///
    /// Returns the index of the new created edge.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeIndex {
        let edge_idx = EdgeIndex::new(self.edges.len());

        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );
        assert!(
            edge.source.index() < self.nodes.len(),
            "Source node index ({}) does not exist",
            edge.source.index()
        );
        assert!(
            edge.target.index() < self.nodes.len(),
            "Target node index ({}) does not exist",
            edge.target.index()
        );
        assert!(
            edge.weight.is_finite() && edge.weight >= 0.0,
            "Edge weight ({}) must be finite and non-negative",
            edge.weight
        );

        self.edges_out[edge.source.index()].push(edge_idx);
        self.edges.push(edge);

        edge_idx
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    pub fn node(&self, node_idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(node_idx.index())
    }

    pub fn contains_node(&self, node_idx: NodeIndex) -> bool {
        node_idx.index() < self.nodes.len()
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Returns an iterator over the outgoing edges of `node_idx`, in
    /// insertion order.
    pub fn neighbors_outgoing(&self, node_idx: NodeIndex) -> impl Iterator<Item = &Edge> + '_ {
        self.edges_out[node_idx.index()]
            .iter()
            .map(move |edge_idx| &self.edges[edge_idx.index()])
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to create a edge from source to target with a weight
///
/// edge!(0, 1, 3.0) Returns edges in both directions
///
/// edge!(0 => 1, 3.0) Returns directed edge
#[macro_export]
macro_rules! edge {
    ($source:expr => $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into(), $weight)
    };
    ($source:expr , $target:expr, $weight:expr) => {
        vec![
            $crate::graph::Edge::new($source.into(), $target.into(), $weight),
            $crate::graph::Edge::new($target.into(), $source.into(), $weight),
        ]
    };
}

/// Macro to create a node with a given id
/// node!(0)
#[macro_export]
macro_rules! node {
    ($id:expr) => {
        $crate::graph::Node::new($id)
    };
}
