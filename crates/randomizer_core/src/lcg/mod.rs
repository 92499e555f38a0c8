//! # Linear Congruential Generator
//!
//! This module provides the [`Randomizer`] generator together with the three
//! constants that define it.
//!
//! ## Recurrence
//!
//! ```text
//! state = (state * MULTIPLIER + INCREMENT) mod MODULUS
//! float = state / MODULUS
//! ```
//!
//! The constants satisfy the Hull-Dobell conditions, so the sequence visits
//! every residue in `[0, MODULUS)` before repeating: the period is exactly
//! 233,280 draws regardless of seed.
//!
//! ## Module Structure
//!
//! - [`generator`]: the stateful generator and its draw operations
//! - [`iter`]: endless iterator adapters over a borrowed generator
//!
//! ## Usage Example
//!
//! ```rust
//! use randomizer_core::lcg::Randomizer;
//!
//! let mut rng = Randomizer::new(1);
//! let first: Vec<i32> = rng.ints(100).take(3).collect();
//! assert_eq!(first, vec![25, 55, 34]);
//! ```

pub mod generator;
pub mod iter;

pub use generator::Randomizer;
pub use iter::{Floats, Ints};

/// Modulus `m` of the recurrence. Also the upper bound on the period.
pub const MODULUS: i64 = 233_280;

/// Multiplier `a` of the recurrence.
pub const MULTIPLIER: i64 = 9_301;

/// Increment `c` of the recurrence.
pub const INCREMENT: i64 = 49_297;
