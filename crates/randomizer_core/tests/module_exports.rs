//! Integration tests for module exports.
//!
//! Verify that all public modules and types are accessible via absolute
//! paths and through the crate-root re-exports.

/// Test that the generator and its constants are reachable from `lcg`.
#[test]
fn test_lcg_module_exports() {
    use randomizer_core::lcg::{Floats, Ints, Randomizer, INCREMENT, MODULUS, MULTIPLIER};

    assert_eq!(MODULUS, 233_280);
    assert_eq!(MULTIPLIER, 9_301);
    assert_eq!(INCREMENT, 49_297);

    let mut rng = Randomizer::new(1);
    let floats: Floats<'_> = rng.floats();
    assert_eq!(floats.take(1).count(), 1);
    let ints: Ints<'_> = rng.ints(10);
    assert_eq!(ints.take(2).count(), 2);
}

/// Test that seed sources are reachable from `seed`.
#[test]
fn test_seed_module_exports() {
    use randomizer_core::seed::{FixedSeed, SeedSource, SeedSpec, WallClock};

    fn accepts_source<S: SeedSource>(source: &S) -> i64 {
        source.seed()
    }

    assert_eq!(accepts_source(&FixedSeed(3)), 3);
    assert_eq!(accepts_source(&SeedSpec::Fixed(4)), 4);
    assert!(accepts_source(&WallClock) > 0);
}

/// Test that error types are reachable from `error`.
#[test]
fn test_error_module_exports() {
    use randomizer_core::error::{RandomizerError, SeedError};

    let _ = RandomizerError::BoundOutOfRange { max: 0 };
    let _ = SeedError::Invalid(String::new());
}

/// Test the crate-root re-exports.
#[test]
fn test_root_reexports() {
    use randomizer_core::{FixedSeed, Randomizer, SeedSpec};

    let mut a = Randomizer::from_source(&FixedSeed(1));
    let mut b = Randomizer::from_source(&"1".parse::<SeedSpec>().unwrap());
    assert_eq!(a.next_int(100), b.next_int(100));
}
