mod id;

use crate::measure::{Bandwidth, Distance, SignalSpeed};
use std::time::Duration;

pub use self::id::LinkId;

/// A physical connection between two [`Node`]s.
///
/// A `Link` is the canonical record stored in the [`Network`]'s link map:
/// its transmission rate, its physical length, and the speed at which a
/// signal propagates along it. It is immutable once registered and holds
/// no per-packet state — all queueing happens at the nodes.
///
/// The link derives the two link-dependent delay components:
///
/// - [`transmission_delay`](Link::transmission_delay) — time to push a
///   packet's bits onto the wire, a function of packet size and rate;
/// - [`propagation_delay`](Link::propagation_delay) — time for the signal
///   to cover the link's length, constant per link.
///
/// [`Node`]: crate::node::Node
/// [`Network`]: crate::network::Network
#[derive(Debug, Clone, Copy)]
pub struct Link {
    bandwidth: Bandwidth,
    length: Distance,
    signal_speed: SignalSpeed,
}

impl Link {
    /// Links are registered through [`Network::new_link`]; the builder
    /// refuses a zero bandwidth or signal speed, so the delay derivations
    /// below are total for every link a network hands out.
    ///
    /// [`Network::new_link`]: crate::network::Network::new_link
    pub(crate) fn new(bandwidth: Bandwidth, length: Distance, signal_speed: SignalSpeed) -> Self {
        Self {
            bandwidth,
            length,
            signal_speed,
        }
    }

    /// the configured transmission rate of this link.
    pub fn bandwidth(&self) -> Bandwidth {
        self.bandwidth
    }

    /// the physical length of this link.
    pub fn length(&self) -> Distance {
        self.length
    }

    /// the signal propagation speed of this link.
    pub fn signal_speed(&self) -> SignalSpeed {
        self.signal_speed
    }

    /// time to transmit `size_bits` bits onto this link.
    pub fn transmission_delay(&self, size_bits: u64) -> Duration {
        self.bandwidth.transmission_time(size_bits)
    }

    /// time for a signal to travel the length of this link.
    ///
    /// Constant per link, independent of the packet.
    pub fn propagation_delay(&self) -> Duration {
        self.signal_speed.travel_time(self.length)
    }
}
