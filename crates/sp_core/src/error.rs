use thiserror::Error;

use crate::graph::NodeIndex;

/// Errors reported by the search API.
///
/// An unreachable target is *not* an error. It is reported as `Ok(None)` by
/// the search, since unreachability is a fact about the graph topology while
/// `UnknownNode` indicates a caller usage error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The given node index does not exist in the graph.
    #[error("node {0:?} does not exist in the graph")]
    UnknownNode(NodeIndex),
}
