//! Long/short flag pair resolution.
//!
//! Scripts often expose the same option twice, e.g. `--name` and `-n`, as
//! separate flags that share a default. Exactly one of the two may differ
//! from that default; anything else is a usage error.

use std::io::Write;

use tracing::debug;

use crate::error::{Fatal, FlagError};
use crate::report::Reporter;

/// Label used in error text when the caller does not name the pair.
pub const DEFAULT_LABEL: &str = "flags";

/// Pick the explicitly set value out of a long/short flag pair.
///
/// `sentinel` is the value a flag holds when it was not given. Missing is
/// checked before conflict, so a pair where both forms equal the sentinel
/// always reports [`FlagError::MissingValue`].
///
/// Works for any equality-comparable value: `String`, `&str`, integers and
/// `bool` are the usual ones.
///
/// # Errors
///
/// [`FlagError::MissingValue`] when both forms equal `sentinel`,
/// [`FlagError::ConflictingValues`] when both differ from it.
pub fn resolve<T: PartialEq>(
    long: T,
    short: T,
    sentinel: &T,
    label: Option<&str>,
) -> Result<T, FlagError> {
    // ---
    let long_set = long != *sentinel;
    let short_set = short != *sentinel;
    let label = label.unwrap_or(DEFAULT_LABEL);

    match (long_set, short_set) {
        (false, false) => Err(FlagError::MissingValue {
            label: label.to_string(),
        }),
        (true, true) => Err(FlagError::ConflictingValues {
            label: label.to_string(),
        }),
        (true, false) => {
            debug!(label, "resolved from long form");
            Ok(long)
        }
        (false, true) => {
            debug!(label, "resolved from short form");
            Ok(short)
        }
    }
}

/// Resolve a flag pair, reporting failures on the fatal path.
///
/// On failure exactly one ERROR line is written to `reporter` and the
/// returned [`Fatal`] carries the [`FlagError`]. The caller is expected to
/// propagate it to the command entry point, which exits.
pub fn get_flag<T: PartialEq, W: Write>(
    reporter: &Reporter<W>,
    long: T,
    short: T,
    sentinel: &T,
    label: Option<&str>,
) -> Result<T, Fatal> {
    resolve(long, short, sentinel, label).map_err(|err| reporter.fatal_flag(err))
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn capture<T: PartialEq>(
        long: T,
        short: T,
        sentinel: T,
        label: Option<&str>,
    ) -> (Result<T, Fatal>, String) {
        // ---
        let reporter = Reporter::new(Vec::new());
        let result = get_flag(&reporter, long, short, &sentinel, label);
        let out = String::from_utf8(reporter.into_inner()).expect("utf-8 output");
        (result, out)
    }

    #[test]
    fn both_default_text_is_missing() {
        // ---
        let (result, out) = capture(String::new(), String::new(), String::new(), None);
        let fatal = result.expect_err("missing value should be fatal");

        assert_eq!(
            fatal.flag_error(),
            Some(&FlagError::MissingValue {
                label: "flags".into()
            })
        );
        assert_eq!(
            out,
            "ERROR: \x1b[31mMissing values for flags. Please provide one.\x1b[0m\n"
        );
    }

    #[test]
    fn long_form_wins_when_short_is_default() {
        // ---
        let (result, out) = capture("custom".to_string(), String::new(), String::new(), None);
        assert_eq!(result.expect("long form is set"), "custom");
        assert!(out.is_empty());
    }

    #[test]
    fn both_set_text_conflicts() {
        // ---
        let (result, out) = capture("a", "b", "", Some("--name/-n"));
        let fatal = result.expect_err("conflict should be fatal");

        assert!(matches!(
            fatal.flag_error(),
            Some(FlagError::ConflictingValues { label }) if label == "--name/-n"
        ));
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("Both --name/-n are set. Please provide only one."));
    }

    #[test]
    fn short_form_integer_wins() {
        let (result, out) = capture(0, 5, 0, None);
        assert_eq!(result.expect("short form is set"), 5);
        assert!(out.is_empty());
    }

    #[test]
    fn integer_pairs_follow_the_sentinel() {
        // ---
        assert_eq!(resolve(7_i64, -1, &-1, None), Ok(7));
        assert_eq!(
            resolve(0_u32, 0, &0, Some("count")),
            Err(FlagError::MissingValue {
                label: "count".into()
            })
        );
        assert_eq!(
            resolve(1_u8, 2, &0, None),
            Err(FlagError::ConflictingValues {
                label: "flags".into()
            })
        );
    }

    #[test]
    fn boolean_pairs() {
        // ---
        assert_eq!(resolve(true, false, &false, None), Ok(true));
        assert_eq!(resolve(false, true, &false, None), Ok(true));
        assert_eq!(resolve(true, false, &true, None), Ok(false));
        assert!(matches!(
            resolve(false, false, &false, None),
            Err(FlagError::MissingValue { .. })
        ));
        assert!(matches!(
            resolve(true, true, &false, None),
            Err(FlagError::ConflictingValues { .. })
        ));
    }

    #[test]
    fn equal_non_default_values_still_conflict() {
        assert!(matches!(
            resolve("same", "same", &"", None),
            Err(FlagError::ConflictingValues { .. })
        ));
    }

    #[test]
    fn exactly_one_set_returns_that_value_for_every_position() {
        // ---
        let sentinel = -1_i32;
        for value in [0, 1, 42, i32::MAX, i32::MIN] {
            assert_eq!(resolve(value, sentinel, &sentinel, None), Ok(value));
            assert_eq!(resolve(sentinel, value, &sentinel, None), Ok(value));
        }
    }

    #[test]
    fn uncolored_reporter_writes_plain_error() {
        // ---
        let reporter = Reporter::new(Vec::new()).with_color(false);
        let fatal = get_flag(&reporter, 0, 0, &0, Some("--times/-t")).unwrap_err();
        assert_eq!(fatal.flag_error().map(FlagError::label), Some("--times/-t"));

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "ERROR: Missing values for --times/-t. Please provide one.\n");
    }
}
