//! Structured log entry for resolved errors.
//!
//! Diagnostic output is a side channel: it borrows from the
//! [`crate::DfuError`] that produced it and never affects resolution. The
//! borrowed lifetime keeps the entry ephemeral - it exists for the duration
//! of one logging call and cannot be retained past the error it describes.
//!
//! Producers that want the split bytes alongside the prose (category and
//! detail are the fields operators filter on) go through here instead of
//! re-parsing the composed message, which is unstructured prose by contract.

use std::fmt;

use crate::codes::ErrorCode;

/// Structured view of a resolved error, borrowed from a [`crate::DfuError`].
///
/// # Example
///
/// ```rust
/// use dfu_errors::{definitions, DfuError};
///
/// let err = DfuError::new(definitions::CRC_MISMATCH)?;
/// let mut line = String::new();
/// err.log_entry().write_to(&mut line)?;
/// assert!(line.starts_with("[0x0003]"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct ResolutionLog<'a> {
    /// The original 16-bit code, verbatim.
    pub code: ErrorCode,
    /// The resolved message, including any caller-supplied context.
    pub message: &'a str,
}

impl<'a> ResolutionLog<'a> {
    /// Write a single formatted line to any `fmt::Write` sink.
    ///
    /// Format: `[0xCCDD] category=0xCC detail=0xDD message='...'`
    ///
    /// Writes directly to the sink - no intermediate allocation, so the
    /// logging framework controls buffering and serialization.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "[{}] category=0x{:02X} detail=0x{:02X} message='{}'",
            self.code,
            self.code.category_byte(),
            self.code.detail(),
            self.message
        )
    }

    /// Get the original code.
    #[inline]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the category byte of the code.
    #[inline]
    pub const fn category_byte(&self) -> u8 {
        self.code.category_byte()
    }

    /// Get the detail byte of the code.
    #[inline]
    pub const fn detail(&self) -> u8 {
        self.code.detail()
    }

    /// Get the resolved message.
    #[inline]
    pub const fn message(&self) -> &str {
        self.message
    }
}
