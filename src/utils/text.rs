//! Number and string conversions.

use crate::{RlError, RlResult};

/// Decimal representation of an integer.
pub fn to_str(value: i32) -> String {
    value.to_string()
}

/// Parses an integer, ignoring surrounding whitespace.
///
/// # Examples
///
/// ```
/// use rlutil::to_int;
///
/// assert_eq!(to_int(" 42 ").unwrap(), 42);
/// assert_eq!(to_int("-7").unwrap(), -7);
/// assert!(to_int("seven").is_err());
/// ```
pub fn to_int(text: &str) -> RlResult<i32> {
    text.trim()
        .parse()
        .map_err(|e| RlError::Parse(format!("'{}' is not an integer: {}", text, e)))
}
