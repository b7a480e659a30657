/// Edge weight type. Weights must be finite and non-negative.
pub type Weight = f64;

/// Caller-supplied node identifier, opaque to the search.
pub type NodeId = usize;
