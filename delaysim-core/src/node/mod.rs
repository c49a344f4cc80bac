mod id;

pub use self::id::NodeId;
use crate::{error::StepError, link::LinkId, packet::Packet};
use std::{collections::BTreeSet, collections::VecDeque, time::Duration};

/// A named vertex of the simulated network.
///
/// A `Node` carries a fixed processing delay (the time it spends handling
/// each packet before forwarding), the set of links it is attached to, and
/// a FIFO queue of packets awaiting forwarding. You never construct a
/// `Node` directly — use [`Network::new_node`] to get a [`NodeBuilder`]
/// which registers the node and returns its [`NodeId`].
///
/// The queue is the only mutable state: packets are appended by
/// [`enqueue`](Node::enqueue) when they arrive and removed from the front
/// by [`dequeue_front`](Node::dequeue_front) when they advance to the next
/// hop. Because a [`Packet`] is moved by value, it can only ever be in one
/// node's queue at a time.
///
/// [`Network::new_node`]: crate::network::Network::new_node
/// [`NodeBuilder`]: crate::network::NodeBuilder
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    name: String,
    processing_delay: Duration,

    /// the links this node is attached to, by identifier.
    ///
    /// Ordered so that adjacency lookups over two link sets are
    /// deterministic.
    links: BTreeSet<LinkId>,

    queue: VecDeque<Packet>,
}

impl Node {
    pub(crate) fn new(
        id: NodeId,
        name: String,
        processing_delay: Duration,
        links: BTreeSet<LinkId>,
    ) -> Self {
        Self {
            id,
            name,
            processing_delay,
            links,
            queue: VecDeque::new(),
        }
    }

    /// Returns the unique identifier of this node.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the display name of this node.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fixed per-packet processing delay of this node.
    #[inline]
    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    /// Returns the identifiers of the links this node is attached to.
    pub fn links(&self) -> &BTreeSet<LinkId> {
        &self.links
    }

    /// `true` if at least one packet is waiting in this node's queue.
    ///
    /// Check this before any hop is processed for a node: the engine's
    /// dequeue errors rather than silently doing nothing on an empty
    /// queue.
    pub fn has_packets(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Iterate over the packets currently waiting in the queue, front first.
    pub fn packets(&self) -> impl Iterator<Item = &Packet> {
        self.queue.iter()
    }

    /// Append a packet to the tail of the queue.
    pub(crate) fn enqueue(&mut self, packet: Packet) {
        self.queue.push_back(packet);
    }

    /// Remove and return the packet at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`StepError::EmptyQueue`] if no packet is waiting — guard with
    /// [`has_packets`](Node::has_packets).
    pub(crate) fn dequeue_front(&mut self) -> Result<Packet, StepError> {
        self.queue
            .pop_front()
            .ok_or(StepError::EmptyQueue { node: self.id })
    }

    /// Drop every packet waiting in the queue.
    ///
    /// Used to reset node state between independent simulation runs.
    pub(crate) fn clear_queue(&mut self) {
        self.queue.clear();
    }
}
