//! The structure a burst run hands to its reporting consumer.
//!
//! A [`BurstReport`] is a plain snapshot: per packet, the ordered list of
//! hops it took and the [`TimeBlock`]s it accumulated at each, plus its
//! end-to-end delay. How this gets rendered — table, chart — is the
//! consumer's business.

use crate::{
    node::NodeId,
    packet::PacketId,
    timeline::{DelayKind, TimeBlock},
};
use std::time::Duration;

/// The delay blocks one packet accumulated at one hop.
#[derive(Debug, Clone)]
pub struct HopRecord {
    /// The node the packet departed from on this hop.
    pub node: NodeId,
    /// The ordered blocks: optional Queuing, then Processing,
    /// Transmission, Propagation.
    pub blocks: Vec<TimeBlock>,
}

/// One packet's full journey along the path.
#[derive(Debug, Clone)]
pub struct PacketRecord {
    /// The packet this record describes.
    pub packet: PacketId,
    /// One entry per hop the packet traversed, in path order.
    pub hops: Vec<HopRecord>,
    /// The packet's end-to-end accumulated delay.
    pub total_delay: Duration,
}

/// Everything a burst run produced, in packet injection order.
#[derive(Debug, Clone)]
pub struct BurstReport {
    /// The path the burst traversed, as given to the simulator.
    pub path: Vec<NodeId>,
    /// Per-packet journey records, FIFO order.
    pub packets: Vec<PacketRecord>,
}

impl HopRecord {
    /// The block of the given kind at this hop, if the packet incurred it.
    ///
    /// Only Queuing is ever absent.
    pub fn block(&self, kind: DelayKind) -> Option<&TimeBlock> {
        self.blocks.iter().find(|block| block.kind() == kind)
    }

    /// The time the packet spent in the given delay category at this hop.
    pub fn delay_of(&self, kind: DelayKind) -> Duration {
        self.block(kind).map(TimeBlock::duration).unwrap_or_default()
    }
}

impl PacketRecord {
    /// Total time this packet spent in the given delay category, summed
    /// over every hop.
    pub fn delay_of(&self, kind: DelayKind) -> Duration {
        self.hops.iter().map(|hop| hop.delay_of(kind)).sum()
    }

    /// Sum of every block duration over every hop.
    ///
    /// Equals [`total_delay`](PacketRecord::total_delay) — the additivity
    /// property the tests pin down.
    pub fn blocks_total(&self) -> Duration {
        self.hops
            .iter()
            .flat_map(|hop| hop.blocks.iter())
            .map(TimeBlock::duration)
            .sum()
    }
}
