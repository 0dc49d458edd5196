//! # rlutil
//!
//! Low-level helpers for grid-based roguelikes.
//!
//! ## Overview
//!
//! Everything here is small, deterministic arithmetic that higher-level game
//! code leans on:
//!
//! - **Geometry**: positions, inclusive rectangles and ranges
//! - **Directions**: the 3×3 compass neighbourhood and its names
//! - **Randomness**: a seeded dice/chance facade over `rand`
//! - **Math**: clamping, distances, containment and adjacency predicates
//! - **Time**: calendar stamps formatted for logs and save file names
//!
//! Contract violations that the callee can recover from are reported through
//! [`rl_assert!`] and handled best-effort instead of aborting the game.

#[macro_use]
pub mod diagnostics;
pub mod geom;
pub mod rng;
pub mod utils;

pub use geom::*;
pub use rng::*;
pub use utils::*;

/// Core error type for the utility layer.
#[derive(thiserror::Error, Debug)]
pub enum RlError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A caller passed arguments outside the function's contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Text could not be parsed into the requested value
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type used throughout the crate.
pub type RlResult<T> = Result<T, RlError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tuning constants.
pub mod config {
    /// Number of sides on a percentile die
    pub const PERCENT_SIDES: i32 = 100;

    /// Seed used when a caller asks for a reproducible default generator
    pub const DEFAULT_SEED: u64 = 12345;

    /// Dice expression used by the CLI when none is given
    pub const DEFAULT_DICE: &str = "1d6";

    /// Angular width of one compass sector, in radians (45 degrees)
    pub const COMPASS_SECTOR: f64 = std::f64::consts::FRAC_PI_4;
}
