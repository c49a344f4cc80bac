//! Delay intervals on the simulation's logical clock.
//!
//! Every hop a packet takes produces an ordered run of [`TimeBlock`]s, one
//! per delay category it incurred. All times are measured from the burst
//! origin (`t = 0`).

use std::{fmt, time::Duration};

/// The four categories of delay a packet accumulates at a hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DelayKind {
    /// time spent waiting for the outgoing link to finish transmitting
    /// the previous packet.
    Queuing,
    /// the node's fixed per-packet handling time.
    Processing,
    /// time to push all the packet's bits onto the link.
    Transmission,
    /// time for the signal to travel the physical length of the link.
    Propagation,
}

impl DelayKind {
    /// all kinds, in the order they occur within a hop.
    pub const ALL: [Self; 4] = [
        Self::Queuing,
        Self::Processing,
        Self::Transmission,
        Self::Propagation,
    ];
}

impl fmt::Display for DelayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queuing => "queuing".fmt(f),
            Self::Processing => "processing".fmt(f),
            Self::Transmission => "transmission".fmt(f),
            Self::Propagation => "propagation".fmt(f),
        }
    }
}

/// One delay interval: a [`DelayKind`] and the `[start, stop]` instants it
/// covers on the logical clock.
///
/// Immutable once constructed. `stop >= start` always holds for blocks
/// produced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeBlock {
    kind: DelayKind,
    start: Duration,
    stop: Duration,
}

impl TimeBlock {
    /// create a new [`TimeBlock`] covering `[start, stop]`.
    pub fn new(kind: DelayKind, start: Duration, stop: Duration) -> Self {
        debug_assert!(stop >= start, "time block stops before it starts");
        Self { kind, start, stop }
    }

    /// which delay category this block records.
    #[inline]
    pub fn kind(&self) -> DelayKind {
        self.kind
    }

    /// the instant the delay began.
    #[inline]
    pub fn start(&self) -> Duration {
        self.start
    }

    /// the instant the delay ended.
    #[inline]
    pub fn stop(&self) -> Duration {
        self.stop
    }

    /// how long the delay lasted.
    ///
    /// ```
    /// # use delaysim_core::timeline::{DelayKind, TimeBlock};
    /// # use std::time::Duration;
    /// let block = TimeBlock::new(
    ///     DelayKind::Transmission,
    ///     Duration::from_millis(2),
    ///     Duration::from_millis(82),
    /// );
    /// assert_eq!(block.duration(), Duration::from_millis(80));
    /// ```
    #[inline]
    pub fn duration(&self) -> Duration {
        self.stop - self.start
    }
}
