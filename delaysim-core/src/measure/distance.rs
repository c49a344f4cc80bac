use anyhow::{bail, ensure};
use logos::{Lexer, Logos};
use std::{fmt, str::FromStr};

/// The physical length of a [`Link`] in metres.
///
/// Together with the link's [`SignalSpeed`] it determines the propagation
/// delay: the time a signal needs to travel from one end to the other.
///
/// # Example
///
/// ```
/// # use delaysim_core::measure::Distance;
/// let satellite: Distance = "42000km".parse().unwrap();
/// assert_eq!(satellite.metres(), 42_000_000);
/// ```
///
/// [`Link`]: crate::link::Link
/// [`SignalSpeed`]: crate::measure::SignalSpeed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u64);

impl Distance {
    /// create a new [`Distance`] of the given number of metres.
    #[inline(always)]
    pub const fn from_metres(metres: u64) -> Self {
        Self(metres)
    }

    /// the raw length in metres.
    #[inline(always)]
    pub const fn metres(self) -> u64 {
        self.0
    }
}

const KM: u64 = 1_000;

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= KM && self.0 % KM == 0 {
            write!(f, "{}km", self.0 / KM)
        } else {
            write!(f, "{}m", self.0)
        }
    }
}

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\n\f]+")] // Ignore this regex pattern between tokens
enum DistanceToken {
    #[regex("m")]
    Metres,
    #[regex("km")]
    Kilometres,

    #[regex("[0-9]+")]
    Value,
}

impl FromStr for Distance {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lex = Lexer::<'_, DistanceToken>::new(s);

        let Some(Ok(DistanceToken::Value)) = lex.next() else {
            bail!("Expecting to parse a number")
        };
        let number: u64 = lex.slice().parse()?;
        let Some(Ok(token)) = lex.next() else {
            bail!("Expecting to parse a unit")
        };
        let metres = match token {
            DistanceToken::Metres => number,
            DistanceToken::Kilometres => number * KM,
            DistanceToken::Value => bail!("Expecting to parse a unit (m or km)"),
        };

        ensure!(
            lex.next().is_none(),
            "Not expecting any other tokens to parse a distance"
        );

        Ok(Self::from_metres(metres))
    }
}

impl Default for Distance {
    fn default() -> Self {
        crate::defaults::DEFAULT_LINK_LENGTH
    }
}
