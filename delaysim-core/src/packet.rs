use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

/// a generator for monotonically increasing **unique** [`PacketId`]
///
#[derive(Debug, Clone, Default)]
pub struct PacketIdGenerator(Arc<AtomicU64>);

/// # [`Packet`] Identifier
///
/// During the lifetime of the packet, this identifier can uniquely
/// identify the packet. Identifiers are handed out in injection order, so
/// they double as the packet's position in the burst.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PacketId(u64);

/// A packet travelling across the simulated network.
///
/// Carries a fixed size in bits and the total delay accumulated so far.
/// The delay starts at zero and only ever grows, by the amounts computed
/// for each hop the packet has traversed. When the packet reaches the
/// final node of its path, [`accumulated_delay`](Packet::accumulated_delay)
/// is the end-to-end value.
///
/// A `Packet` is moved (never copied) between node queues, so it can only
/// ever sit in one queue at a time.
#[derive(Debug)]
pub struct Packet {
    id: PacketId,
    size_bits: u64,
    accumulated_delay: Duration,
}

impl PacketIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// generate a new unique identifier
    ///
    /// The first identifier is `0`, matching the burst position of the
    /// first injected packet.
    pub fn generate(&self) -> PacketId {
        PacketId(self.0.fetch_add(1, Ordering::SeqCst))
    }
}

impl Packet {
    /// create a new packet of `size_bits` bits with no delay accumulated yet.
    pub fn new(id: PacketId, size_bits: u64) -> Self {
        Self {
            id,
            size_bits,
            accumulated_delay: Duration::ZERO,
        }
    }

    #[inline]
    pub fn id(&self) -> PacketId {
        self.id
    }

    /// the size of the packet in bits.
    #[inline]
    pub fn size_bits(&self) -> u64 {
        self.size_bits
    }

    /// the total delay this packet has accumulated so far.
    #[inline]
    pub fn accumulated_delay(&self) -> Duration {
        self.accumulated_delay
    }

    /// add `amount` to the packet's running delay total.
    pub fn add_delay(&mut self, amount: Duration) {
        self.accumulated_delay += amount;
    }
}

impl fmt::Display for PacketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
