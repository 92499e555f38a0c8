//! Draw command: prints bounded integers, one per line.
//!
//! With the default configuration this seeds a single generator from the
//! wall clock and prints ten `next_int(100)` draws in call order.

use std::io::Write;

use randomizer_core::Randomizer;
use tracing::{debug, info};

use crate::config::DemoConfig;
use crate::Result;

/// Runs the draw command, writing each value on its own line to `out`.
///
/// # Returns
///
/// The generator after the final draw, so callers can inspect its seed and
/// state.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<Randomizer> {
    let mut rng = Randomizer::from_source(&config.seed);
    info!(
        seed = rng.seed(),
        source = %config.seed,
        count = config.count,
        max = config.max,
        "Drawing bounded integers"
    );

    for value in rng.ints(config.max).take(config.count) {
        writeln!(out, "{}", value)?;
    }
    out.flush()?;

    debug!(state = rng.state(), "Draws complete");
    Ok(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use randomizer_core::SeedSpec;

    fn lines(buffer: &[u8]) -> Vec<i32> {
        String::from_utf8_lossy(buffer)
            .lines()
            .map(|l| l.parse().unwrap())
            .collect()
    }

    #[test]
    fn test_default_prints_ten_lines_in_range() {
        let mut buffer = Vec::new();
        run(&DemoConfig::default(), &mut buffer).unwrap();

        let values = lines(&buffer);
        assert_eq!(values.len(), 10);
        assert!(values.iter().all(|v| (0..=100).contains(v)));
    }

    #[test]
    fn test_fixed_seed_output() {
        let config = DemoConfig {
            seed: SeedSpec::Fixed(1),
            count: 5,
            ..Default::default()
        };
        let mut buffer = Vec::new();
        let rng = run(&config, &mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "25\n55\n34\n95\n77\n");
        assert_eq!(rng.seed(), 1);
        assert_eq!(rng.state(), 178_626);
    }

    #[test]
    fn test_zero_count_prints_nothing() {
        let config = DemoConfig {
            seed: SeedSpec::Fixed(1),
            count: 0,
            ..Default::default()
        };
        let mut buffer = Vec::new();
        let rng = run(&config, &mut buffer).unwrap();

        assert!(buffer.is_empty());
        assert_eq!(rng.state(), 1);
    }

    #[test]
    fn test_zero_bound_prints_zeros() {
        let config = DemoConfig {
            seed: SeedSpec::Fixed(-1),
            count: 3,
            max: 0,
            ..Default::default()
        };
        let mut buffer = Vec::new();
        run(&config, &mut buffer).unwrap();

        assert_eq!(lines(&buffer), vec![0, 0, 0]);
    }
}
