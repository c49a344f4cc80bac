use crate::{
    error::StepError,
    network::Network,
    node::NodeId,
    packet::PacketId,
    timeline::{DelayKind, TimeBlock},
};
use std::time::Duration;

/// Everything produced by advancing one packet across one hop.
///
/// The blocks are ordered as the delays occur: an optional Queuing block,
/// then Processing, Transmission, and Propagation — contiguous on the
/// logical clock, each starting where the previous one stopped.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// the packet that was advanced.
    pub packet: PacketId,
    /// the ordered delay blocks of this hop.
    pub blocks: Vec<TimeBlock>,
    /// the instant the packet's last bit left the outgoing link.
    ///
    /// This is the only piece of this hop the *next* packet needs: it
    /// must queue until the link is free.
    pub transmission_ends: Duration,
    /// the instant the packet arrives at the next node.
    pub departure: Duration,
    /// the packet's total accumulated delay after this hop.
    pub accumulated_delay: Duration,
}

impl Network {
    /// Advance the front packet of `current` across the hop to `next`.
    ///
    /// `arrival` is the instant the packet arrived at `current` on the
    /// logical clock. `link_free_at` is the instant the outgoing link
    /// finished transmitting the previous packet on this same hop
    /// ([`StepOutcome::transmission_ends`]), or `None` if this is the
    /// first packet on the hop.
    ///
    /// The packet is charged, in order:
    ///
    /// 1. **Queuing** — only if `link_free_at` is strictly later than
    ///    `arrival`; the packet waits exactly the overrun. A link freed at
    ///    the very instant of arrival charges nothing.
    /// 2. **Processing** — the node's fixed delay.
    /// 3. **Transmission** — packet size over the shared link's rate.
    /// 4. **Propagation** — the shared link's length over its signal speed.
    ///
    /// The packet then moves to `next`'s queue and the ordered
    /// [`TimeBlock`]s are returned.
    ///
    /// # Errors
    ///
    /// - [`StepError::LinkNotFound`] — `current` and `next` share no link.
    ///   The queue of `current` is left untouched; the run cannot proceed.
    /// - [`StepError::EmptyQueue`] — `current` has no packet waiting.
    ///   Callers guard with [`Node::has_packets`] and skip the hop.
    /// - [`StepError::NodeNotFound`] — either identifier is unknown.
    ///
    /// [`Node::has_packets`]: crate::node::Node::has_packets
    pub fn advance_hop(
        &mut self,
        current: NodeId,
        next: NodeId,
        arrival: Duration,
        link_free_at: Option<Duration>,
    ) -> Result<StepOutcome, StepError> {
        // Resolve the link before touching the queue: a malformed path
        // must not consume the packet.
        let link_id = self.shared_link(current, next)?;
        let link = *self
            .links
            .get(&link_id)
            .ok_or(StepError::LinkNotFound { current, next })?;

        let (mut packet, processing) = {
            let Some(node) = self.nodes.get_mut(&current) else {
                return Err(StepError::NodeNotFound { node: current });
            };
            let processing = node.processing_delay();
            (node.dequeue_front()?, processing)
        };

        let mut blocks = Vec::with_capacity(4);

        // The link transmits one packet at a time: arriving while it is
        // still busy costs exactly the overrun.
        let mut queuing = Duration::ZERO;
        if let Some(free_at) = link_free_at
            && free_at > arrival
        {
            blocks.push(TimeBlock::new(DelayKind::Queuing, arrival, free_at));
            queuing = free_at - arrival;
        }

        let t1 = arrival + queuing;
        let t2 = t1 + processing;
        blocks.push(TimeBlock::new(DelayKind::Processing, t1, t2));
        // queuing is charged once, bundled with processing
        packet.add_delay(processing + queuing);

        let transmission = link.transmission_delay(packet.size_bits());
        let propagation = link.propagation_delay();

        let t3 = t2 + transmission;
        blocks.push(TimeBlock::new(DelayKind::Transmission, t2, t3));
        packet.add_delay(transmission);

        let t4 = t3 + propagation;
        blocks.push(TimeBlock::new(DelayKind::Propagation, t3, t4));
        packet.add_delay(propagation);

        log::debug!(
            "packet {id} {current} -> {next}: queued until {q:.5}ms, processed until {p:.5}ms, \
             transmitted until {t:.5}ms, propagated until {g:.5}ms",
            id = packet.id(),
            q = t1.as_secs_f64() * 1e3,
            p = t2.as_secs_f64() * 1e3,
            t = t3.as_secs_f64() * 1e3,
            g = t4.as_secs_f64() * 1e3,
        );

        let outcome = StepOutcome {
            packet: packet.id(),
            blocks,
            transmission_ends: t3,
            departure: t4,
            accumulated_delay: packet.accumulated_delay(),
        };

        let Some(next_node) = self.nodes.get_mut(&next) else {
            return Err(StepError::NodeNotFound { node: next });
        };
        next_node.enqueue(packet);

        Ok(outcome)
    }
}
