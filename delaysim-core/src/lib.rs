//! Deterministic multi-hop packet delay simulation primitives.
//!
//! A burst of packets is loaded onto the source node of a path and driven
//! hop by hop across the [`Network`]; each hop charges up to four delay
//! categories — queuing, processing, transmission, propagation — and
//! records them as [`TimeBlock`]s on a logical clock. The resulting
//! [`BurstReport`] carries, per packet, the ordered per-hop block
//! sequences and the end-to-end delay.
//!
//! Everything is single-threaded and synchronous: one packet traverses
//! the whole path before the next starts, and all "time" is simulated.
//!
//! ```
//! use delaysim_core::{BurstSimulator, Packet, PacketIdGenerator, network::Network};
//! use std::time::Duration;
//!
//! let mut network = Network::new();
//! let wire = network
//!     .new_link()
//!     .set_bandwidth("100kbps".parse().unwrap())
//!     .build()
//!     .unwrap();
//! let a = network.new_node().set_name("A").attach_link(wire).build();
//! let b = network.new_node().set_name("B").attach_link(wire).build();
//!
//! let generator = PacketIdGenerator::new();
//! for _ in 0..2 {
//!     network
//!         .push_packet(a, Packet::new(generator.generate(), 8_000))
//!         .unwrap();
//! }
//!
//! let simulator = BurstSimulator::new(vec![a, b]).unwrap();
//! let report = simulator.run(&mut network).unwrap();
//!
//! // the second packet queued behind the first one's 80ms transmission
//! assert!(report.packets[1].total_delay > report.packets[0].total_delay);
//! ```
//!
//! [`Network`]: crate::network::Network
//! [`TimeBlock`]: crate::timeline::TimeBlock
//! [`BurstReport`]: crate::report::BurstReport

mod burst;
pub mod defaults;
mod error;
pub mod link;
pub mod measure;
pub mod network;
pub mod node;
mod packet;
pub mod report;
pub mod timeline;

pub use self::{
    burst::BurstSimulator,
    error::{PathError, StepError},
    packet::{Packet, PacketId, PacketIdGenerator},
};
