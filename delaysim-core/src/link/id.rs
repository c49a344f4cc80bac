use std::fmt;

/// Stable identifier of a link, assigned when the link is registered with
/// the [`Network`].
///
/// A link has no endpoint fields of its own — nodes record which links
/// they are attached to, and adjacency between two nodes is inferred from
/// the intersection of their link sets. Comparing identifiers (rather
/// than references) is what makes that lookup well defined.
///
/// [`Network`]: crate::network::Network
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkId(u64);

impl LinkId {
    pub const ZERO: Self = LinkId::new(0);
    pub const ONE: Self = LinkId::new(1);

    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use = "function does not modify the current value"]
    pub(crate) fn next(self) -> Self {
        Self::new(self.0 + 1)
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
