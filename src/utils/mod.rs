//! # Utilities Module
//!
//! Utility functions for grid mathematics, time stamps and text conversion.

pub mod math;
pub mod text;
pub mod time;

pub use math::*;
pub use text::*;
pub use time::*;
