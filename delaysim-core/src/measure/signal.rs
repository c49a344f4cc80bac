use crate::measure::Distance;
use std::{fmt, time::Duration};

/// The speed at which a signal propagates along a [`Link`], in metres per
/// second.
///
/// # Example
///
/// ```
/// # use delaysim_core::measure::{Distance, SignalSpeed};
/// # use std::time::Duration;
/// // 60m of cable at 2×10⁸ m/s
/// let delay = SignalSpeed::CABLE.travel_time(Distance::from_metres(60));
/// assert_eq!(delay, Duration::from_nanos(300));
/// ```
///
/// [`Link`]: crate::link::Link
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignalSpeed(u64);

impl SignalSpeed {
    /// propagation through air or vacuum (radio, satellite): 3×10⁸ m/s.
    pub const VACUUM: Self = Self::new(300_000_000);

    /// propagation through copper or fibre: 2×10⁸ m/s.
    pub const CABLE: Self = Self::new(200_000_000);

    /// create a new [`SignalSpeed`] of the given number of metres per second.
    #[inline(always)]
    pub const fn new(metres_per_sec: u64) -> Self {
        Self(metres_per_sec)
    }

    /// the raw speed in metres per second.
    #[inline(always)]
    pub const fn metres_per_sec(self) -> u64 {
        self.0
    }

    /// how long a signal takes to travel `distance` at this speed.
    ///
    /// # Precondition
    ///
    /// The speed must be non-zero; [`LinkBuilder::build`] enforces this
    /// for every link registered with a [`Network`].
    ///
    /// [`LinkBuilder::build`]: crate::network::LinkBuilder::build
    /// [`Network`]: crate::network::Network
    pub fn travel_time(self, distance: Distance) -> Duration {
        debug_assert!(self.0 > 0, "signal travelling at zero speed");
        Duration::from_secs_f64(distance.metres() as f64 / self.0 as f64)
    }
}

impl fmt::Display for SignalSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m/s", self.0)
    }
}

impl Default for SignalSpeed {
    fn default() -> Self {
        crate::defaults::DEFAULT_SIGNAL_SPEED
    }
}
