//! Convenience macros for the registry and for error construction.
//!
//! # Registry Definition
//!
//! [`define_error_codes!`] declares a block of named constants within one
//! category. Each expansion goes through [`crate::ErrorCode::const_new`],
//! so a constant whose upper byte disagrees with its declared category is a
//! compile error - the append-only registry cannot drift.
//!
//! # Error Construction
//!
//! [`dfu_err!`] is shorthand for the [`crate::DfuError`] constructors,
//! with an optional format-string context:
//!
//! ```rust
//! use dfu_errors::{definitions, dfu_err};
//!
//! let object = 3;
//! let err = dfu_err!(definitions::CRC_MISMATCH, "while writing object {}", object)?;
//! assert!(err.message().ends_with("while writing object 3"));
//! # Ok::<(), dfu_errors::ClassificationError>(())
//! ```

// ============================================================================
// Registry Definition Macros
// ============================================================================

/// Define a single named registry constant.
///
/// Prefer [`define_error_codes!`] for blocks; this is its per-entry
/// expansion.
#[macro_export]
macro_rules! define_error_code {
    ($name:ident, $category:expr, $raw:expr) => {
        #[doc = concat!(
            "Registry code `",
            stringify!($raw),
            "`. The numeric value is shipped and never renumbered."
        )]
        pub const $name: $crate::ErrorCode = $crate::ErrorCode::const_new($category, $raw);
    };
}

/// Define multiple registry constants within the same category.
///
/// # Example
///
/// ```rust
/// use dfu_errors::{define_error_codes, Category};
///
/// define_error_codes! {
///     Category::Response => {
///         OPCODE_UNKNOWN = 0x0102,
///         PARAMETER_MISSING = 0x0103,
///     }
/// }
///
/// assert_eq!(OPCODE_UNKNOWN.detail(), 0x02);
/// ```
#[macro_export]
macro_rules! define_error_codes {
    ($category:expr => { $( $name:ident = $raw:expr ),+ $(,)? }) => {
        $(
            $crate::define_error_code!($name, $category, $raw);
        )+
    };
}

// ============================================================================
// Error Construction Macro
// ============================================================================

/// Construct a [`crate::DfuError`], optionally with formatted context.
///
/// Expands to the fallible constructors, so the result is a
/// `Result<DfuError, ClassificationError>` for the caller to `?` through.
///
/// - `dfu_err!(CODE)` - no context
/// - `dfu_err!(CODE, "literal context")`
/// - `dfu_err!(CODE, "format {}", args...)`
#[macro_export]
macro_rules! dfu_err {
    ($code:expr) => {
        $crate::DfuError::new($code)
    };
    ($code:expr, $context:literal) => {
        $crate::DfuError::with_context($code, $context)
    };
    ($code:expr, $fmt:literal, $($arg:expr),+ $(,)?) => {
        $crate::DfuError::with_context($code, &format!($fmt, $($arg),+))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::{Category, definitions};

    define_error_codes! {
        Category::Extended => {
            TEST_EXT_NOT_SET = 0x0200,
            TEST_EXT_INCORRECT = 0x0201,
        }
    }

    #[test]
    fn macro_batch_definition() {
        assert_eq!(TEST_EXT_NOT_SET.raw(), 0x0200);
        assert_eq!(TEST_EXT_INCORRECT.category(), Some(Category::Extended));
    }

    #[test]
    fn dfu_err_without_context() {
        let err = dfu_err!(definitions::CRC_MISMATCH).unwrap();
        assert_eq!(err.message(), "Error message: CRC mismatches.");
    }

    #[test]
    fn dfu_err_with_literal_context() {
        let err = dfu_err!(definitions::UNABLE_FIND_PORT, "tried /dev/ttyACM0").unwrap();
        assert!(err.message().ends_with("Unable to find port. tried /dev/ttyACM0"));
    }

    #[test]
    fn dfu_err_with_formatted_context() {
        let retries = 5;
        let err = dfu_err!(
            definitions::TOO_MANY_WRITE_FAILURES,
            "gave up after {} retries",
            retries
        )
        .unwrap();
        assert!(err.message().ends_with("gave up after 5 retries"));
    }

    #[test]
    fn dfu_err_propagates_classification_failure() {
        let result = dfu_err!(crate::ErrorCode::new(0x0501), "context");
        assert!(result.is_err());
    }
}
