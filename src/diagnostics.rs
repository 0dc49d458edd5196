//! # Diagnostics
//!
//! Soft assertions for recoverable contract violations.
//!
//! A failed [`rl_assert!`](crate::rl_assert) logs the stringified check with its
//! source location and hands the result back to the caller, which then picks
//! the most plausible intended behaviour. Building with the `strict-asserts`
//! feature turns failures into panics in debug builds.

/// Checks a condition, logging it as a failed assertion when it is false.
///
/// Evaluates to the value of the condition.
///
/// # Examples
///
/// ```
/// use rlutil::rl_assert;
///
/// let denom = 0;
/// if !rl_assert!(denom >= 1, "denominator was {}", denom) {
///     // fall back to something sensible
/// }
/// assert!(rl_assert!(1 + 1 == 2));
/// ```
#[macro_export]
macro_rules! rl_assert {
    ($cond:expr $(,)?) => {{
        let ok: bool = $cond;
        if !ok {
            $crate::diagnostics::report_failure(
                stringify!($cond),
                None,
                file!(),
                line!(),
                module_path!(),
            );
        }
        ok
    }};
    ($cond:expr, $($arg:tt)+) => {{
        let ok: bool = $cond;
        if !ok {
            $crate::diagnostics::report_failure(
                stringify!($cond),
                Some(format!($($arg)+).as_str()),
                file!(),
                line!(),
                module_path!(),
            );
        }
        ok
    }};
}

/// Logs a failed check. Called by [`rl_assert!`](crate::rl_assert).
#[doc(hidden)]
pub fn report_failure(check: &str, detail: Option<&str>, file: &str, line: u32, module: &str) {
    let report = format_failure(check, detail, file, line, module);
    log::error!("{}", report);

    if cfg!(all(feature = "strict-asserts", debug_assertions)) {
        panic!("{}", report);
    }
}

fn format_failure(check: &str, detail: Option<&str>, file: &str, line: u32, module: &str) -> String {
    match detail {
        Some(detail) => format!(
            "{}, {}, {}(): *** ASSERTION FAILED! *** {} ({})",
            file, line, module, check, detail
        ),
        None => format!(
            "{}, {}, {}(): *** ASSERTION FAILED! *** {}",
            file, line, module, check
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_check_evaluates_true() {
        assert!(rl_assert!(2 > 1));
        assert!(rl_assert!(2 > 1, "never shown {}", 3));
    }

    #[cfg(not(feature = "strict-asserts"))]
    #[test]
    fn test_failing_check_evaluates_false() {
        let value = -4;
        assert!(!rl_assert!(value >= 0));
        assert!(!rl_assert!(value >= 0, "value was {}", value));
    }

    #[cfg(all(feature = "strict-asserts", debug_assertions))]
    #[test]
    #[should_panic(expected = "ASSERTION FAILED")]
    fn test_strict_failure_panics() {
        let value = -4;
        rl_assert!(value >= 0, "value was {}", value);
    }

    #[test]
    fn test_failure_report_layout() {
        let report = format_failure("x > 0", Some("x was -1"), "src/rng/mod.rs", 42, "rlutil::rng");
        assert_eq!(
            report,
            "src/rng/mod.rs, 42, rlutil::rng(): *** ASSERTION FAILED! *** x > 0 (x was -1)"
        );

        let bare = format_failure("ok", None, "a.rs", 1, "m");
        assert!(bare.ends_with("*** ASSERTION FAILED! *** ok"));
    }
}
