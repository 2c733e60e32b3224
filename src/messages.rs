//! The three read-only message tables and the resolution algorithm.
//!
//! # The Registry Is the Protocol
//!
//! The tables below are a versioned, append-only mapping mirroring the DFU
//! target firmware's documented response and extended-error codes, plus the
//! host library's own generic codes. Entry text is carried byte-for-byte as
//! originally shipped (historical misspellings included): operators grep logs
//! for these exact strings, and external callers match on the numeric codes,
//! so entries are never reworded, renumbered or removed. Supporting new
//! target firmware means appending entries.
//!
//! # Sparseness
//!
//! Not every byte value 0x00-0xFF has an entry, and absence is meaningful,
//! not an oversight:
//!
//! - response 0x01 is protocol success and is never populated
//! - response 0x06 and 0x09 are absent from the target's own documentation
//! - response 0x0B is the "extended error follows" escape; the byte that
//!   follows it is resolved against the extended table instead
//!
//! A lookup miss therefore degrades to a placeholder segment in the composed
//! message rather than failing (see [`resolve`]).
//!
//! # Concurrency
//!
//! Each table is a `const fn` match: the mapping lives in the program text,
//! needs no initialization or teardown, and is trivially safe for
//! unsynchronized concurrent reads.

use tracing::{debug, trace};

use crate::codes::{ClassificationError, ErrorCode};

// ============================================================================
// Generic Messages (category 0x00, host-side library errors)
// ============================================================================

/// Registry text for the generic category, keyed by detail byte.
///
/// Sub-ranges follow the transport that raises them: 0x00-0x04 abstract
/// transport, 0x10-0x18 PRN transport, 0x31-0x34 sink transport, 0x51-0x53
/// BLE transport, 0x71-0x72 serial/USB transport.
pub(crate) const fn generic_message(detail: u8) -> Option<&'static str> {
    match detail {
        0x00 => Some("Cannot instantiate DfuAbstractTransport, use a concrete subclass instead."),
        0x01 => Some(
            "A previous DFU process was interrupted, and it was left in such a state \
             that cannot be continued. Please perform a DFU procedure disabling continuation.",
        ),
        0x02 => Some("Unexpected bytes to be sent."),
        0x03 => Some("CRC mismatches."),
        0x04 => Some("Too many write failures."),
        0x10 => Some("Cannot instantiate DfuTransportPrn, use a concrete subclass instead."),
        0x11 => Some("DFU procotol cannot use a PRN higher than 0xFFFF."),
        0x12 => Some("DFU transport tried to read() while another read() was still waiting"),
        0x13 => Some(
            "Timeout while reading from serial transport. See \
             https://github.com/NordicSemiconductor/pc-nrfconnect-core/blob/master/doc/serial-timeout-troubleshoot.md",
        ),
        0x14 => Some("DFU transport received two messages at once"),
        0x15 => Some("Response from DFU target did not start with 0x60"),
        0x16 => Some("Tried to assert an empty parsed response"),
        0x17 => Some("Unexpected opcode in response"),
        0x18 => Some("Unexpected bytes in response"),
        0x31 => Some("Must create/select a payload type first."),
        0x32 => Some("Invoked with a mismatched CRC32 checksum."),
        0x33 => Some("Tried to push more bytes to a chunk than the chunk size."),
        0x34 => Some("Tried to select invalid payload type. Valid types are 0x01 and 0x02."),
        0x51 => Some("Could not discover DFU control and packet characteristics"),
        0x52 => Some("Timeout while fetching characteristics from BLE peripheral"),
        0x53 => Some("Could not subscribe to changes of the control characteristics"),
        0x71 => Some("Unkown firmware image type"),
        0x72 => Some("Unable to find port."),
        _ => None,
    }
}

// ============================================================================
// Response Messages (category 0x01, mirrored from the DFU target)
// ============================================================================

/// Registry text for the target's documented response codes.
pub(crate) const fn response_message(detail: u8) -> Option<&'static str> {
    match detail {
        0x00 => Some("Missing or malformed opcode."),
        // 0x01 is success, never populated
        0x02 => Some("Opcode unknown or not supported."),
        0x03 => Some("A parameter for the opcode was missing."),
        0x04 => Some("Not enough memory for the data object."),
        // 0x05 should not be seen from bootloaders newer than late 2017;
        // those report one of the extended codes instead
        0x05 => Some(
            "The data object didn't match firmware/hardware, or missing crypto signature, \
             or malformed protocol buffer, or command parse failed.",
        ),
        // 0x06, 0x09 are missing from the target's documentation
        0x07 => Some("Unsupported object type for create/read operation."),
        0x08 => Some("Cannot allow this operation in the current DFU state."),
        0x0A => Some("Operation failed."),
        // 0x0B means an extended error code follows; that next byte is
        // resolved against the extended table
        _ => None,
    }
}

// ============================================================================
// Extended Messages (category 0x02, mirrored from the DFU target)
// ============================================================================

/// Registry text for the target's documented extended error codes.
pub(crate) const fn extended_message(detail: u8) -> Option<&'static str> {
    match detail {
        0x00 => Some("An error happened, but its extended error code hasn't been set."),
        0x01 => Some("An error happened, but its extended error code is incorrect."),
        // 0x02 should never be seen; responses 0x02 and 0x03 cover all
        // possible incorrect inputs
        0x02 => Some("The format of the command was incorrect."),
        0x03 => Some("Command successfully parsed, but it is not supported or unknown."),
        0x04 => Some(
            "The init command is invalid. The init packet either has an invalid update type \
             or it is missing required fields for the update type (for example, the init \
             packet for a SoftDevice update is missing the SoftDevice size field).",
        ),
        0x05 => Some(
            "The firmware version is too low. For an application, the version must be \
             greater than the current application. For a bootloader, it must be greater \
             than or equal to the current version. This requirement prevents downgrade \
             attacks.",
        ),
        0x06 => Some(
            "The hardware version of the device does not match the required hardware \
             version for the update.",
        ),
        0x07 => Some(
            "The array of supported SoftDevices for the update does not contain the FWID \
             of the current SoftDevice.",
        ),
        0x08 => Some(
            "The init packet does not contain a signature. This bootloader requires DFU \
             updates to be signed.",
        ),
        0x09 => Some(
            "The hash type that is specified by the init packet is not supported by the \
             DFU bootloader.",
        ),
        0x0A => Some("The hash of the firmware image cannot be calculated."),
        0x0B => Some(
            "The type of the signature is unknown or not supported by the DFU bootloader.",
        ),
        0x0C => Some(
            "The hash of the received firmware image does not match the hash in the init \
             packet.",
        ),
        0x0D => Some("The available space on the device is insufficient to hold the firmware."),
        0x0E => Some("The requested firmware to update was already present on the system."),
        _ => None,
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Translate a 16-bit code into a labeled, human-readable string.
///
/// The algorithm:
///
/// 1. split the code into category byte and detail byte
/// 2. classify the category; an unknown category byte fails hard with
///    [`ClassificationError`] (a caller defect, never a device condition)
/// 3. look the detail byte up in the category's table
/// 4. compose `"<category label>: <detail text>"`; a lookup miss substitutes
///    the placeholder `"(unknown detail code 0xNN)"` so the message never
///    ends in a dangling separator
///
/// Resolution is pure: same code in, same string out, no side effects beyond
/// trace-level diagnostics.
///
/// # Example
///
/// ```rust
/// use dfu_errors::{definitions, resolve};
///
/// let message = resolve(definitions::CRC_MISMATCH)?;
/// assert_eq!(message, "Error message: CRC mismatches.");
/// # Ok::<(), dfu_errors::ClassificationError>(())
/// ```
pub fn resolve(code: ErrorCode) -> Result<String, ClassificationError> {
    let category = code.classify()?;
    let detail = code.detail();
    trace!(code = %code, category = category.label(), detail, "classified error code");

    let message = match category.message_for(detail) {
        Some(text) => format!("{}: {}", category.label(), text),
        None => {
            debug!(code = %code, detail, "detail byte has no registry entry");
            format!("{}: (unknown detail code 0x{:02X})", category.label(), detail)
        }
    };
    Ok(message)
}

/// [`resolve`], with caller-supplied context appended.
///
/// A non-empty `context` is appended after a single space, verbatim. An empty
/// `context` appends nothing, so `resolve_with_context(code, "")` equals
/// `resolve(code)` - producers routinely thread an optional context string
/// through unconditionally.
pub fn resolve_with_context(
    code: ErrorCode,
    context: &str,
) -> Result<String, ClassificationError> {
    let mut message = resolve(code)?;
    if !context.is_empty() {
        message.push(' ');
        message.push_str(context);
    }
    Ok(message)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Category;

    #[test]
    fn generic_table_spot_checks() {
        assert_eq!(generic_message(0x03), Some("CRC mismatches."));
        assert_eq!(generic_message(0x72), Some("Unable to find port."));
        assert!(generic_message(0x00).unwrap().contains("DfuAbstractTransport"));
    }

    #[test]
    fn generic_table_gaps_between_transport_ranges() {
        assert_eq!(generic_message(0x05), None);
        assert_eq!(generic_message(0x19), None);
        assert_eq!(generic_message(0x35), None);
        assert_eq!(generic_message(0x54), None);
        assert_eq!(generic_message(0xFF), None);
    }

    #[test]
    fn response_success_is_deliberately_unmapped() {
        assert_eq!(response_message(0x01), None);
    }

    #[test]
    fn response_undocumented_codes_are_unmapped() {
        assert_eq!(response_message(0x06), None);
        assert_eq!(response_message(0x09), None);
        assert_eq!(response_message(0x0B), None);
    }

    #[test]
    fn extended_table_is_contiguous_through_0x0e() {
        for detail in 0x00..=0x0Eu8 {
            assert!(extended_message(detail).is_some(), "missing 0x{detail:02X}");
        }
        assert_eq!(extended_message(0x0F), None);
    }

    #[test]
    fn resolve_composes_label_and_text() {
        let message = resolve(ErrorCode::new(0x0003)).unwrap();
        assert_eq!(message, "Error message: CRC mismatches.");
    }

    #[test]
    fn resolve_substitutes_placeholder_for_unmapped_detail() {
        let message = resolve(ErrorCode::new(0x0101)).unwrap();
        assert_eq!(
            message,
            format!("{}: (unknown detail code 0x01)", Category::Response.label())
        );
    }

    #[test]
    fn resolve_fails_hard_on_unknown_category() {
        let err = resolve(ErrorCode::new(0x0301)).unwrap_err();
        assert_eq!(err, ClassificationError { code: 0x0301, category: 0x03 });
    }

    #[test]
    fn context_is_appended_after_a_single_space() {
        let plain = resolve(ErrorCode::new(0x0208)).unwrap();
        let with_ctx = resolve_with_context(ErrorCode::new(0x0208), "while sending init packet")
            .unwrap();
        assert_eq!(with_ctx, format!("{plain} while sending init packet"));
    }

    #[test]
    fn empty_context_appends_nothing() {
        let plain = resolve(ErrorCode::new(0x0102)).unwrap();
        let with_empty = resolve_with_context(ErrorCode::new(0x0102), "").unwrap();
        assert_eq!(with_empty, plain);
    }
}
