//! Seed sources.
//!
//! The generator never chooses its own seed. Callers inject one through a
//! [`SeedSource`]:
//! - [`WallClock`]: milliseconds since the Unix epoch
//! - [`FixedSeed`]: a constant, for reproducible runs
//! - [`SeedSpec`]: either of the above, parsed from text (`clock` or an integer)

use std::fmt;
use std::str::FromStr;

use chrono::Utc;

use crate::error::SeedError;

/// A provider of initial generator state.
pub trait SeedSource {
    /// Returns the seed to initialise a generator with.
    fn seed(&self) -> i64;
}

/// Seeds from the current wall-clock time in milliseconds since the epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallClock;

impl SeedSource for WallClock {
    fn seed(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Always yields the wrapped seed.
///
/// # Examples
/// ```
/// use randomizer_core::{FixedSeed, SeedSource};
///
/// assert_eq!(FixedSeed(-1).seed(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(
    /// The seed returned by every call
    pub i64,
);

impl SeedSource for FixedSeed {
    fn seed(&self) -> i64 {
        self.0
    }
}

/// Textual seed selection, as accepted on command lines and in config files.
///
/// Parses `clock` (case-insensitive) to [`SeedSpec::Clock`] and any decimal
/// `i64` (sign allowed) to [`SeedSpec::Fixed`].
///
/// # Examples
/// ```
/// use randomizer_core::SeedSpec;
///
/// assert_eq!("clock".parse::<SeedSpec>().unwrap(), SeedSpec::Clock);
/// assert_eq!("-17".parse::<SeedSpec>().unwrap(), SeedSpec::Fixed(-17));
/// assert!("soon".parse::<SeedSpec>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedSpec {
    /// Seed from the wall clock at resolution time.
    #[default]
    Clock,
    /// Use this exact seed.
    Fixed(i64),
}

impl SeedSource for SeedSpec {
    fn seed(&self) -> i64 {
        match self {
            SeedSpec::Clock => WallClock.seed(),
            SeedSpec::Fixed(seed) => FixedSeed(*seed).seed(),
        }
    }
}

impl FromStr for SeedSpec {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("clock") {
            return Ok(SeedSpec::Clock);
        }
        trimmed
            .parse::<i64>()
            .map(SeedSpec::Fixed)
            .map_err(|_| SeedError::Invalid(s.to_string()))
    }
}

impl fmt::Display for SeedSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedSpec::Clock => write!(f, "clock"),
            SeedSpec::Fixed(seed) => write!(f, "{}", seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_seed_passthrough() {
        assert_eq!(FixedSeed(0).seed(), 0);
        assert_eq!(FixedSeed(i64::MIN).seed(), i64::MIN);
        assert_eq!(SeedSpec::Fixed(99).seed(), 99);
    }

    #[test]
    fn test_wall_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z in milliseconds
        assert!(WallClock.seed() > 1_577_836_800_000);
    }

    #[test]
    fn test_wall_clock_is_monotone_enough() {
        let a = WallClock.seed();
        let b = SeedSpec::Clock.seed();
        assert!(b >= a);
    }

    #[test]
    fn test_seed_spec_parsing() {
        assert_eq!(SeedSpec::from_str("clock").unwrap(), SeedSpec::Clock);
        assert_eq!(SeedSpec::from_str("CLOCK").unwrap(), SeedSpec::Clock);
        assert_eq!(SeedSpec::from_str(" 42 ").unwrap(), SeedSpec::Fixed(42));
        assert_eq!(SeedSpec::from_str("+5").unwrap(), SeedSpec::Fixed(5));
        assert_eq!(
            SeedSpec::from_str("-9223372036854775808").unwrap(),
            SeedSpec::Fixed(i64::MIN)
        );

        assert_eq!(
            SeedSpec::from_str("1.5"),
            Err(SeedError::Invalid("1.5".to_string()))
        );
        assert!(SeedSpec::from_str("").is_err());
        assert!(SeedSpec::from_str("99999999999999999999").is_err());
    }

    #[test]
    fn test_seed_spec_display() {
        assert_eq!(format!("{}", SeedSpec::Clock), "clock");
        assert_eq!(format!("{}", SeedSpec::Fixed(-3)), "-3");
    }

    #[test]
    fn test_seed_spec_default_is_clock() {
        assert_eq!(SeedSpec::default(), SeedSpec::Clock);
    }
}
