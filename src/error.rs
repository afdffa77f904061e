//! Failure conditions shared by the spanning-tree and component algorithms.

use thiserror::Error;

use crate::graph::{EdgeId, NodeId};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations detected before any algorithmic work begins.
///
/// Every variant is fatal to the call that reported it, but only to that
/// call: the graph is left untouched and can be fixed up and resubmitted.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// The algorithms are defined on undirected graphs only.
    #[error("graph is directed")]
    DirectedGraph,

    /// An edge is missing its weight.
    #[error("edge {0:?} has no weight")]
    MissingWeight(EdgeId),

    /// An edge carries a weight that is negative or NaN.
    #[error("edge {edge:?} has negative or NaN weight {weight}")]
    NegativeWeight {
        /// The offending edge.
        edge: EdgeId,
        /// The weight it carried.
        weight: f64,
    },

    /// A node id does not name a node of the graph it was used with.
    #[error("node {0:?} is not in the graph")]
    NodeOutOfBounds(NodeId),
}
