//! # randomizer_core: Textbook Linear Congruential Generator
//!
//! ## Role
//!
//! randomizer_core is the bottom layer of the workspace, providing:
//! - The stateful generator [`Randomizer`] (`lcg`)
//! - Seed sources: wall clock, fixed seeds and textual seed specs (`seed`)
//! - Error types: `RandomizerError`, `SeedError` (`error`)
//!
//! The generator is the classic "Numerical Recipes" LCG
//! `state = (state * 9301 + 49297) mod 233280`. Its period is at most
//! 233,280 draws and it is unsuitable for cryptography or rigorous
//! statistical work; it exists for casual, reproducible randomness.
//!
//! ## Usage Examples
//!
//! ```rust
//! use randomizer_core::Randomizer;
//!
//! let mut rng = Randomizer::new(1);
//!
//! // First step of the sequence for seed 1
//! let value = rng.next_float();
//! assert!((value - 58598.0 / 233280.0).abs() < 1e-12);
//!
//! // Bounded integers round to nearest; the bound itself is reachable
//! let roll = rng.next_int(100);
//! assert!((0..=100).contains(&roll));
//! ```
//!
//! Seeding from the wall clock:
//!
//! ```rust
//! use randomizer_core::seed::WallClock;
//! use randomizer_core::Randomizer;
//!
//! let mut rng = Randomizer::from_source(&WallClock);
//! let _ = rng.next_int(6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod lcg;
pub mod seed;

pub use error::{RandomizerError, SeedError};
pub use lcg::{Randomizer, INCREMENT, MODULUS, MULTIPLIER};
pub use seed::{FixedSeed, SeedSource, SeedSpec, WallClock};
