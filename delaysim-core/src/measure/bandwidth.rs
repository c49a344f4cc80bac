use anyhow::{bail, ensure};
use logos::{Lexer, Logos};
use std::{fmt, str::FromStr, time::Duration};

/// The transmission rate of a [`Link`] in bits per second.
///
/// The [`Bandwidth`] determines how long it takes to push all the bits of
/// a packet onto the wire: `transmission_time = size_bits / rate`. Larger
/// packets and slower links increase the time linearly.
///
/// Units are decimal: `1kbps` is 1_000 bits per second.
///
/// # Example
///
/// ```
/// # use delaysim_core::measure::Bandwidth;
/// # use std::time::Duration;
/// // a 100kbps link takes 80ms to transmit a 8_000 bit packet
/// let bw: Bandwidth = "100kbps".parse().unwrap();
/// assert_eq!(
///     bw.transmission_time(8_000),
///     Duration::from_millis(80),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bandwidth(u64);

impl Bandwidth {
    /// create a new [`Bandwidth`] of the given number of bits per second.
    #[inline(always)]
    pub const fn new(bits_per_sec: u64) -> Self {
        Self(bits_per_sec)
    }

    /// the raw rate in bits per second.
    #[inline(always)]
    pub const fn bits_per_sec(self) -> u64 {
        self.0
    }

    /// how long it takes to transmit `size_bits` bits at this rate.
    ///
    /// # Precondition
    ///
    /// The rate must be non-zero. [`LinkBuilder::build`] refuses zero-rate
    /// links, so every [`Link`] held by a [`Network`] satisfies this.
    ///
    /// [`Link`]: crate::link::Link
    /// [`LinkBuilder::build`]: crate::network::LinkBuilder::build
    /// [`Network`]: crate::network::Network
    pub fn transmission_time(self, size_bits: u64) -> Duration {
        debug_assert!(self.0 > 0, "transmission over a zero-rate link");
        Duration::from_secs_f64(size_bits as f64 / self.0 as f64)
    }
}

const K: u64 = 1_000;
const M: u64 = 1_000_000;
const G: u64 = 1_000_000_000;

impl fmt::Display for Bandwidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;

        if v < K || v % K != 0 {
            write!(f, "{v}bps")
        } else if v < M || v % M != 0 {
            write!(f, "{}kbps", v / K)
        } else if v < G || v % G != 0 {
            write!(f, "{}mbps", v / M)
        } else {
            write!(f, "{}gbps", v / G)
        }
    }
}

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\n\f]+")] // Ignore this regex pattern between tokens
enum BandwidthToken {
    #[regex("bps")]
    Bps,
    #[regex("kbps")]
    Kbps,
    #[regex("mbps")]
    Mbps,
    #[regex("gbps")]
    Gbps,

    #[regex("[0-9]+")]
    Value,
}

impl FromStr for Bandwidth {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lex = Lexer::<'_, BandwidthToken>::new(s);

        let Some(Ok(BandwidthToken::Value)) = lex.next() else {
            bail!("Expecting to parse a number")
        };
        let number: u64 = lex.slice().parse()?;
        let Some(Ok(token)) = lex.next() else {
            bail!("Expecting to parse a unit")
        };
        let bps = match token {
            BandwidthToken::Bps => number,
            BandwidthToken::Kbps => number * K,
            BandwidthToken::Mbps => number * M,
            BandwidthToken::Gbps => number * G,
            BandwidthToken::Value => bail!("Expecting to parse a unit (bps, kbps, ...)"),
        };

        ensure!(
            lex.next().is_none(),
            "Not expecting any other tokens to parse a bandwidth"
        );

        Ok(Self::new(bps))
    }
}

impl Default for Bandwidth {
    fn default() -> Self {
        crate::defaults::DEFAULT_BANDWIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bandwidth() {
        macro_rules! assert_bandwidth {
            ($string:literal == $value:expr) => {
                assert_eq!($string.parse::<Bandwidth>().unwrap(), Bandwidth::new($value));
            };
        }

        assert_bandwidth!("0bps" == 0);
        assert_bandwidth!("42bps" == 42);
        assert_bandwidth!("100kbps" == 100 * K);
        assert_bandwidth!("100mbps" == 100 * M);
        assert_bandwidth!("2gbps" == 2 * G);
    }

    #[test]
    fn parse_invalid_strings() {
        assert!("42".parse::<Bandwidth>().is_err()); // no unit
        assert!("mbps".parse::<Bandwidth>().is_err()); // no number
        assert!("".parse::<Bandwidth>().is_err()); // empty
        assert!("42mbps extra".parse::<Bandwidth>().is_err()); // trailing token
    }

    #[test]
    fn print_bandwidth() {
        assert_eq!(Bandwidth::new(0).to_string(), "0bps");
        assert_eq!(Bandwidth::new(42).to_string(), "42bps");
        assert_eq!(Bandwidth::new(100 * K).to_string(), "100kbps");
        assert_eq!(Bandwidth::new(500 * M).to_string(), "500mbps");
        assert_eq!(Bandwidth::new(2 * G).to_string(), "2gbps");
        // non-exact multiples fall back to the smaller unit
        assert_eq!(Bandwidth::new(1_500).to_string(), "1500bps");
    }

    #[test]
    fn display_round_trip() {
        let original = Bandwidth::new(50 * M);
        let parsed: Bandwidth = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn transmission_time_scales_with_size() {
        // 1 Mbps → 1 bit per µs
        let bw = Bandwidth::new(M);

        assert_eq!(bw.transmission_time(0), Duration::ZERO);
        assert_eq!(bw.transmission_time(1), Duration::from_micros(1));
        assert_eq!(bw.transmission_time(8_000), Duration::from_millis(8));
    }

    #[test]
    fn transmission_time_scales_with_rate() {
        // the web-fetch scenario's bottleneck link: 8_000 bits at 100kbps
        let slow = Bandwidth::new(100 * K);
        let fast = Bandwidth::new(100 * M);

        assert_eq!(slow.transmission_time(8_000), Duration::from_millis(80));
        assert_eq!(fast.transmission_time(8_000), Duration::from_micros(80));
    }
}
