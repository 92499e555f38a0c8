//! Command line front end for the randomizer LCG.
//!
//! The binary is a demonstration: it seeds one generator (from the wall
//! clock unless configured otherwise) and prints bounded integer draws to
//! stdout. Diagnostics go to stderr through `tracing`.

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
