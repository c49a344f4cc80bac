use crate::measure::{Bandwidth, Distance, SignalSpeed};
use std::time::Duration;

/// Default [`Bandwidth`]
///
/// This is the transmission rate a [`Link`] gets when none is set on the
/// [`LinkBuilder`].
///
/// ```
/// # use delaysim_core::defaults::*;
/// assert_eq!(
///     DEFAULT_BANDWIDTH.to_string(),
///     "100mbps"
/// );
/// ```
///
/// [`Link`]: crate::link::Link
/// [`LinkBuilder`]: crate::network::LinkBuilder
pub const DEFAULT_BANDWIDTH: Bandwidth = Bandwidth::new(100_000_000);

/// Default [`Link`] length
///
/// ```
/// # use delaysim_core::defaults::*;
/// assert_eq!(
///     DEFAULT_LINK_LENGTH.to_string(),
///     "100m"
/// );
/// ```
///
/// [`Link`]: crate::link::Link
pub const DEFAULT_LINK_LENGTH: Distance = Distance::from_metres(100);

/// Default [`SignalSpeed`]
///
/// Copper/fibre propagation, 2×10⁸ m/s.
pub const DEFAULT_SIGNAL_SPEED: SignalSpeed = SignalSpeed::CABLE;

/// Default processing delay of a [`Node`]
///
/// End hosts typically forward with no processing cost;
/// switches set an explicit value via [`NodeBuilder::set_processing_delay`].
///
/// [`Node`]: crate::node::Node
/// [`NodeBuilder::set_processing_delay`]: crate::network::NodeBuilder::set_processing_delay
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::ZERO;
