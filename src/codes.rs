//! Error code identity layer - splitting 16-bit DFU codes into category and detail.
//!
//! Every error this crate describes is identified by a single unsigned 16-bit
//! value. The upper byte selects the *category* (which message table applies),
//! the lower byte is the *detail* (an index within that table):
//!
//! ```text
//!  0x0102
//!    ^^-- detail byte (0x02, "Opcode unknown or not supported.")
//!  ^^---- category byte (0x01, response code from the DFU target)
//! ```
//!
//! # Category Space
//!
//! - **0x00** - generic library/transport errors raised on the host side
//! - **0x01** - response codes mirrored from the DFU target's protocol
//! - **0x02** - extended error codes the target sends when a response code
//!   alone is not specific enough
//!
//! Any other category byte is *unclassified*. Hitting one is a caller defect
//! (a constant from outside the shipped registry), so classification fails
//! hard with [`ClassificationError`] instead of degrading to a fallback
//! string. Contrast this with a missing *detail* entry, which is an expected
//! state of the sparse tables and degrades softly (see [`crate::resolve`]).
//!
//! # Zero-Allocation Guarantee
//!
//! Everything in this module is `const`-evaluable and allocation-free:
//! splitting a code, classifying it, and fetching a category label all
//! compile down to shifts, masks, and static pointer returns.

use std::fmt;
use thiserror::Error;

// ============================================================================
// Category
// ============================================================================

/// The upper byte of a 16-bit DFU error code.
///
/// Selects which of the three read-only message tables a detail byte is
/// resolved against. The discriminants are the wire values and must never
/// change: external callers match on the numeric code, and the generic
/// category's constants are historically encoded as full 16-bit values with
/// the category pre-shifted into the upper byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    /// Host-side library and transport errors (0x0000-0x00FF).
    Generic = 0x00,
    /// Response codes reported by the DFU target (0x0100-0x01FF).
    Response = 0x01,
    /// Extended error codes reported by the DFU target (0x0200-0x02FF).
    Extended = 0x02,
}

impl Category {
    /// Classify a raw category byte.
    ///
    /// Returns `None` for any byte outside the three shipped categories.
    /// Callers that need the hard-failure form should go through
    /// [`ErrorCode::classify`] instead, which preserves the offending code.
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Self::Generic),
            0x01 => Some(Self::Response),
            0x02 => Some(Self::Extended),
            _ => None,
        }
    }

    /// Get the wire value of this category.
    #[inline]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Get the human-readable label prefixed to every resolved message.
    ///
    /// The three labels are part of the shipped registry and are carried
    /// verbatim; operators grep logs for them to tell "our library's bug"
    /// apart from "the device rejected the update".
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Generic => "Error message",
            Self::Response => "Error message for known response code from DFU target",
            Self::Extended => "Error message for known extended error code from DFU target",
        }
    }

    /// Look up the registry text for a detail byte within this category.
    ///
    /// Returns `None` when the detail byte has no table entry. Absence is a
    /// valid, expected state: the tables are sparse (e.g. response 0x01 is
    /// deliberately unmapped because it denotes protocol success).
    #[inline]
    pub const fn message_for(self, detail: u8) -> Option<&'static str> {
        match self {
            Self::Generic => crate::messages::generic_message(detail),
            Self::Response => crate::messages::response_message(detail),
            Self::Extended => crate::messages::extended_message(detail),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Error Code
// ============================================================================

/// A 16-bit DFU error code, preserved verbatim from the producer.
///
/// This is a plain wire value: `Copy`, comparable, hashable, and never
/// reinterpreted after construction. Consumers branch on it programmatically
/// (equality against the [`crate::definitions`] constants) while the resolved
/// message is what gets displayed.
///
/// # Construction
///
/// - [`ErrorCode::new`] / `From<u16>`: any raw value, including codes whose
///   category byte is unknown. Classification is deferred to resolve time so
///   that the offending value survives intact for diagnostics.
/// - [`ErrorCode::const_new`]: registry-only form that asserts at compile
///   time that the upper byte matches the declared category. Used by the
///   [`crate::define_error_codes!`] macro so a mis-ranged constant is a
///   build failure, not a latent runtime surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Wrap a raw 16-bit code.
    #[inline]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Create a registry constant with compile-time category validation.
    ///
    /// # Panics
    ///
    /// Panics (at compile time in const contexts) if the upper byte of `raw`
    /// does not equal the declared category. This keeps the append-only
    /// registry honest: a constant cannot silently drift into a foreign
    /// category range.
    #[inline]
    pub const fn const_new(category: Category, raw: u16) -> Self {
        assert!(
            raw >> 8 == category as u16,
            "upper byte of a registry code must match its declared category"
        );
        Self(raw)
    }

    /// Get the raw 16-bit value.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the category byte (`raw >> 8`).
    #[inline]
    pub const fn category_byte(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Get the detail byte (`raw & 0xFF`).
    #[inline]
    pub const fn detail(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Classify the category byte, if it is one of the three shipped values.
    #[inline]
    pub const fn category(self) -> Option<Category> {
        Category::from_byte(self.category_byte())
    }

    /// Classify the category byte, failing hard on an unknown category.
    ///
    /// This is Step 2 of message resolution. An unrecognized category is a
    /// programming error in the caller (a constant from outside the shipped
    /// registry), not a condition reported by the remote device, so it
    /// surfaces as a distinct [`ClassificationError`] rather than a string.
    #[inline]
    pub const fn classify(self) -> Result<Category, ClassificationError> {
        match self.category() {
            Some(category) => Ok(category),
            None => Err(ClassificationError {
                code: self.0,
                category: self.category_byte(),
            }),
        }
    }
}

impl From<u16> for ErrorCode {
    #[inline]
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

impl fmt::Display for ErrorCode {
    /// Zero-allocation formatting - writes directly to the formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

// ============================================================================
// Classification Failure
// ============================================================================

/// Hard failure raised when a code's category byte is not 0x00, 0x01 or 0x02.
///
/// This is deliberately *not* folded into the soft fallback path: an unknown
/// category means the caller passed a value from outside the versioned
/// registry, which is a defect to surface, not a device condition to display.
/// Both the full offending code and the extracted category byte are preserved
/// for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("unknown error category 0x{category:02X} in code 0x{code:04X}")]
pub struct ClassificationError {
    /// The offending 16-bit code, verbatim.
    pub code: u16,
    /// The unrecognized category byte (`code >> 8`).
    pub category: u8,
}

// ============================================================================
// Tests
// ============================================================================
