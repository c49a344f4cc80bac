//! Physical measures of a link: transmission rate, length, and the speed
//! at which a signal travels along it.

mod bandwidth;
mod distance;
mod signal;

pub use self::{bandwidth::Bandwidth, distance::Distance, signal::SignalSpeed};
