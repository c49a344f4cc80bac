use crate::node::NodeId;
use thiserror::Error;

/// Error raised while advancing a packet across a hop.
///
/// None of these are retried anywhere — every computation in the engine is
/// deterministic, so retrying would be a no-op. Failures surface
/// synchronously to the caller of the failing operation.
#[derive(Debug, Error)]
pub enum StepError {
    /// A node identifier that is not registered with the [`Network`].
    ///
    /// [`Network`]: crate::network::Network
    #[error("Node ({node}) Not Found")]
    NodeNotFound { node: NodeId },

    /// A dequeue was attempted on a node with no waiting packets.
    ///
    /// Callers guard with [`Node::has_packets`]; the burst simulator
    /// treats a packet-less node as "skip this hop", never as an error.
    ///
    /// [`Node::has_packets`]: crate::node::Node::has_packets
    #[error("Node ({node}) has no packet waiting in its queue")]
    EmptyQueue { node: NodeId },

    /// No common link between two supposedly-adjacent nodes on the path.
    ///
    /// The topology is malformed for the requested path; there is no
    /// recovery and the simulation run aborts.
    #[error("No shared link between nodes ({current}) and ({next})")]
    LinkNotFound { current: NodeId, next: NodeId },
}

/// Error raised when constructing a [`BurstSimulator`] with an unusable path.
///
/// [`BurstSimulator`]: crate::burst::BurstSimulator
#[derive(Debug, Error)]
pub enum PathError {
    /// A path needs a source and at least one further node to hop to.
    #[error("A path needs at least two nodes, got {len}")]
    TooShort { len: usize },
}
