mod step;

use crate::{
    error::StepError,
    link::{Link, LinkId},
    measure::{Bandwidth, Distance, SignalSpeed},
    node::{Node, NodeId},
    packet::Packet,
};
use anyhow::{Result, ensure};
use std::collections::{BTreeSet, HashMap};

pub use self::step::StepOutcome;

/// The topology every simulation runs over: the set of [`Node`]s and the
/// set of [`Link`]s they are attached to.
///
/// The `Network` owns both. Nodes refer to links only by [`LinkId`], and
/// whether two nodes are adjacent is decided by intersecting their link
/// sets — see [`shared_link`](Network::shared_link).
///
/// Register links first, then the nodes that attach to them:
///
/// ```
/// use delaysim_core::network::Network;
/// use std::time::Duration;
///
/// let mut network = Network::new();
/// let wire = network
///     .new_link()
///     .set_bandwidth("100mbps".parse().unwrap())
///     .set_length("240m".parse().unwrap())
///     .build()
///     .unwrap();
///
/// let s1 = network
///     .new_node()
///     .set_name("S1")
///     .set_processing_delay(Duration::from_millis(1))
///     .attach_link(wire)
///     .build();
/// let c = network.new_node().set_name("C").attach_link(wire).build();
///
/// assert_eq!(network.shared_link(s1, c).unwrap(), wire);
/// ```
pub struct Network {
    nodes: HashMap<NodeId, Node>,

    links: HashMap<LinkId, Link>,

    /// the next node identifier to hand out.
    node_id: NodeId,

    /// the next link identifier to hand out.
    link_id: LinkId,
}

/// Builder for configuring a new node before registering it with the network.
///
/// Obtained via [`Network::new_node`]. Set the name and processing delay,
/// attach the links the node is connected to, then call
/// [`build`](NodeBuilder::build) to register the node and obtain its
/// [`NodeId`].
pub struct NodeBuilder<'a> {
    name: Option<String>,
    processing_delay: std::time::Duration,
    links: BTreeSet<LinkId>,

    network: &'a mut Network,
}

/// Builder for registering a link with the network.
///
/// Obtained via [`Network::new_link`]. Defaults come from
/// [`defaults`](crate::defaults); [`build`](LinkBuilder::build) validates
/// the parameters and returns the new [`LinkId`].
pub struct LinkBuilder<'a> {
    bandwidth: Bandwidth,
    length: Distance,
    signal_speed: SignalSpeed,

    network: &'a mut Network,
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> NodeBuilder<'a> {
    fn new(network: &'a mut Network) -> Self {
        Self {
            name: None,
            processing_delay: crate::defaults::DEFAULT_PROCESSING_DELAY,
            links: BTreeSet::new(),
            network,
        }
    }

    /// Set the display name of the node.
    ///
    /// Defaults to `N<id>` when not set.
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the fixed per-packet processing delay of the node.
    ///
    /// Defaults to zero (an end host that forwards at no cost).
    pub fn set_processing_delay(mut self, delay: std::time::Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Attach the node to a registered link.
    ///
    /// May be called once per incident link. Attaching the same link twice
    /// is a no-op.
    pub fn attach_link(mut self, link: LinkId) -> Self {
        self.links.insert(link);
        self
    }

    /// Finalise the node configuration and register it with the network.
    ///
    /// Returns the [`NodeId`] assigned to this node.
    pub fn build(self) -> NodeId {
        let Self {
            name,
            processing_delay,
            links,
            network,
        } = self;

        let id = network.node_id;
        network.node_id = id.next();

        let name = name.unwrap_or_else(|| format!("N{id}"));
        network
            .nodes
            .insert(id, Node::new(id, name, processing_delay, links));

        id
    }
}

impl<'a> LinkBuilder<'a> {
    fn new(network: &'a mut Network) -> Self {
        Self {
            bandwidth: Bandwidth::default(),
            length: Distance::default(),
            signal_speed: SignalSpeed::default(),
            network,
        }
    }

    /// Set the transmission rate of this link.
    pub fn set_bandwidth(mut self, bandwidth: Bandwidth) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    /// Set the physical length of this link.
    pub fn set_length(mut self, length: Distance) -> Self {
        self.length = length;
        self
    }

    /// Set the signal propagation speed of this link.
    pub fn set_signal_speed(mut self, signal_speed: SignalSpeed) -> Self {
        self.signal_speed = signal_speed;
        self
    }

    /// Validate the parameters and register the link with the network.
    ///
    /// # Errors
    ///
    /// A zero bandwidth or zero signal speed would make the delay
    /// derivations meaningless (a packet would never finish transmitting
    /// or never arrive), so both are refused here rather than checked at
    /// every computation.
    pub fn build(self) -> Result<LinkId> {
        let Self {
            bandwidth,
            length,
            signal_speed,
            network,
        } = self;

        ensure!(
            bandwidth.bits_per_sec() > 0,
            "A link needs a non-zero transmission rate"
        );
        ensure!(
            signal_speed.metres_per_sec() > 0,
            "A link needs a non-zero signal speed"
        );

        let id = network.link_id;
        network.link_id = id.next();

        network
            .links
            .insert(id, Link::new(bandwidth, length, signal_speed));

        Ok(id)
    }
}

impl Network {
    /// Create a new, empty network.
    ///
    /// Add links with [`new_link`](Network::new_link) and nodes with
    /// [`new_node`](Network::new_node).
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            links: HashMap::new(),
            node_id: NodeId::ZERO,
            link_id: LinkId::ZERO,
        }
    }

    /// Register a new link and return a builder to configure it.
    pub fn new_link(&mut self) -> LinkBuilder<'_> {
        LinkBuilder::new(self)
    }

    /// Create a new node and return a builder to configure it.
    pub fn new_node(&mut self) -> NodeBuilder<'_> {
        NodeBuilder::new(self)
    }

    /// Look up a node by identifier.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Look up a link by identifier.
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(&id)
    }

    /// The link shared by two adjacent nodes.
    ///
    /// Computed as the intersection of the two nodes' link sets. When the
    /// nodes share more than one link the smallest [`LinkId`] wins — a
    /// deterministic choice, but which of the parallel links that is, is
    /// unspecified.
    ///
    /// # Errors
    ///
    /// - [`StepError::NodeNotFound`] — either identifier is not registered.
    /// - [`StepError::LinkNotFound`] — the nodes share no link: the
    ///   topology is malformed for a path that treats them as adjacent.
    pub fn shared_link(&self, current: NodeId, next: NodeId) -> Result<LinkId, StepError> {
        let Some(a) = self.nodes.get(&current) else {
            return Err(StepError::NodeNotFound { node: current });
        };
        let Some(b) = self.nodes.get(&next) else {
            return Err(StepError::NodeNotFound { node: next });
        };

        a.links()
            .intersection(b.links())
            .next()
            .copied()
            .ok_or(StepError::LinkNotFound { current, next })
    }

    /// Append a packet to a node's queue.
    ///
    /// This is how a burst is loaded onto its source node before a run.
    ///
    /// # Errors
    ///
    /// [`StepError::NodeNotFound`] if `node` is not registered.
    pub fn push_packet(&mut self, node: NodeId, packet: Packet) -> Result<(), StepError> {
        let Some(node) = self.nodes.get_mut(&node) else {
            return Err(StepError::NodeNotFound { node });
        };
        node.enqueue(packet);
        Ok(())
    }

    /// Drop every queued packet on every node.
    ///
    /// Call between independent simulation runs over the same topology.
    pub fn clear_queues(&mut self) {
        for node in self.nodes.values_mut() {
            node.clear_queue();
        }
    }
}
