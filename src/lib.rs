//! # DFU Errors
//!
//! Error classification and message resolution for DFU firmware-update
//! transports.
//!
//! ## Design Philosophy
//!
//! 1. **One value, two audiences**: a [`DfuError`] carries the original
//!    16-bit `code` for programmatic branching and a resolved `message` for
//!    display. The code is preserved verbatim and never reinterpreted.
//! 2. **The registry is append-only**: codes and their text are shipped
//!    protocol surface. Entries are added for new target firmware, never
//!    renumbered, reworded or removed.
//! 3. **Hard failures are caller defects**: a code whose category byte is
//!    outside the three shipped categories fails with a distinct
//!    [`ClassificationError`] instead of producing a fallback string. A
//!    missing *detail* entry, by contrast, is an expected state of the
//!    sparse tables and degrades to a placeholder segment.
//! 4. **Pure formatting layer**: nothing here retries, recovers or touches
//!    protocol state. Resolution is O(1), synchronous, and safe to call
//!    from any thread without locking - the tables are compile-time static.
//!
//! ## Quick Start
//!
//! ```rust
//! use dfu_errors::{DfuError, definitions};
//!
//! let err = DfuError::with_context(definitions::RSP_OPCODE_UNKNOWN, "during select")?;
//!
//! // For programmatic branching:
//! assert_eq!(err.code(), definitions::RSP_OPCODE_UNKNOWN);
//!
//! // For display (unstructured prose, not machine-parseable):
//! assert_eq!(
//!     err.message(),
//!     "Error message for known response code from DFU target: \
//!      Opcode unknown or not supported. during select"
//! );
//! # Ok::<(), dfu_errors::ClassificationError>(())
//! ```
//!
//! ## Producers and Consumers
//!
//! Transports, protocol state machines and discovery logic *produce* a
//! [`DfuError`] from a [`definitions`] constant plus optional free-text
//! context; logging, CLI and UI layers *consume* `code` and `message`.
//! Neither side needs anything else from this crate - the composed message
//! always leads with the category label so operators can tell a host-side
//! library bug from a rejection reported by the device.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::fmt;
use std::result;

use thiserror::Error;

pub mod codes;
pub mod convenience;
pub mod definitions;
pub mod logging;
pub mod messages;

pub use codes::*;
pub use definitions::*;
pub use logging::*;
pub use messages::*;

/// Type alias for Results produced by DFU transports and state machines.
pub type Result<T> = result::Result<T, DfuError>;

// ============================================================================
// Error Value
// ============================================================================

/// A resolved DFU error: the original 16-bit code plus its display message.
///
/// Constructed once at the moment a failure is detected, immutable
/// thereafter, and propagated up the call chain until a boundary (CLI exit,
/// UI notification) displays it. It represents a *reported* condition - a
/// device rejection or a host-side transport failure - not a defect in this
/// crate.
///
/// # Contract
///
/// - `code` is stored verbatim and never mutated or reinterpreted.
/// - `message` is `"<category label>: <detail text>"`, optionally followed
///   by a single space and the caller-supplied context. Consumers must
///   treat it as unstructured prose.
/// - Two values constructed from the same code and context are equal and
///   carry identical messages.
///
/// # Construction
///
/// Both constructors are fallible: a code whose category byte is unknown is
/// a caller defect and surfaces as [`ClassificationError`] rather than a
/// malformed `DfuError`.
#[must_use = "errors should be handled or logged"]
#[derive(Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct DfuError {
    code: ErrorCode,
    message: String,
}

impl DfuError {
    /// Resolve `code` and wrap it together with its message.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError`] when the category byte of `code` is
    /// not 0x00, 0x01 or 0x02.
    pub fn new(code: ErrorCode) -> result::Result<Self, ClassificationError> {
        Ok(Self {
            code,
            message: resolve(code)?,
        })
    }

    /// Resolve `code` with caller-supplied context appended to the message.
    ///
    /// An empty `context` appends nothing; see [`resolve_with_context`].
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError`] when the category byte of `code` is
    /// not 0x00, 0x01 or 0x02.
    pub fn with_context(
        code: ErrorCode,
        context: &str,
    ) -> result::Result<Self, ClassificationError> {
        Ok(Self {
            code,
            message: resolve_with_context(code, context)?,
        })
    }

    /// Get the original 16-bit code, verbatim.
    #[inline]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the resolved display message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the category of the code.
    ///
    /// Construction already validated the category byte, so this cannot
    /// miss; the `match` exists only because the validation result is not
    /// stored (the value owns nothing beyond code and message).
    #[inline]
    pub fn category(&self) -> Category {
        match self.code.category() {
            Some(category) => category,
            // Unreachable: constructors reject unclassifiable codes.
            None => unreachable!("DfuError constructed with an unclassified code"),
        }
    }

    /// Get the detail byte of the code.
    ///
    /// Preserved numerically even when the detail has no registry text, so
    /// diagnostics can always report the exact value the producer saw.
    #[inline]
    pub const fn detail(&self) -> u8 {
        self.code.detail()
    }

    /// Create a structured log entry borrowing from this error.
    #[inline]
    pub fn log_entry(&self) -> ResolutionLog<'_> {
        ResolutionLog {
            code: self.code,
            message: &self.message,
        }
    }
}

impl fmt::Debug for DfuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DfuError")
            .field("code", &self.code)
            .field("message", &self.message)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
