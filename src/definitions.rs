//! Named constants for every shipped DFU error code.
//!
//! # Taxonomy & Governance
//!
//! This file is the producer-facing half of the registry: transports,
//! protocol state machines and discovery logic construct a
//! [`crate::DfuError`] by picking one of these constants (never a bare
//! integer literal). The constants are grouped by the subsystem that raises
//! them, and each group occupies a fixed sub-range of the category space.
//!
//! The registry is versioned and append-only. External callers match on the
//! numeric values, so a shipped constant is never renumbered or removed;
//! supporting new target firmware means appending constants (and their
//! message-table entries in [`crate::messages`]).
//!
//! # Governance
//!
//! Category membership is enforced at compile time via
//! [`crate::ErrorCode::const_new`] inside the definition macro. Sub-range
//! membership is enforced by the `tests` module at the bottom of this file:
//! a constant defined outside its transport's range fails the build's test
//! run.

use crate::{Category, define_error_codes};

/// Sub-range boundaries for the registry, by producing subsystem.
///
/// The three top-level ranges are fixed by the code layout itself (the upper
/// byte). Within the generic category, each transport owns a block of detail
/// bytes; the blocks are checked for consistency in the `tests` module.
pub mod ranges {
    pub const GENERIC_START: u16 = 0x0000;   pub const GENERIC_END: u16 = 0x00FF;
    pub const RESPONSE_START: u16 = 0x0100;  pub const RESPONSE_END: u16 = 0x01FF;
    pub const EXTENDED_START: u16 = 0x0200;  pub const EXTENDED_END: u16 = 0x02FF;

    pub const ABSTRACT_START: u16 = 0x0000;  pub const ABSTRACT_END: u16 = 0x000F;
    pub const PRN_START: u16 = 0x0010;       pub const PRN_END: u16 = 0x002F;
    pub const SINK_START: u16 = 0x0030;      pub const SINK_END: u16 = 0x004F;
    pub const BLE_START: u16 = 0x0050;       pub const BLE_END: u16 = 0x006F;
    pub const SERIAL_START: u16 = 0x0070;    pub const SERIAL_END: u16 = 0x008F;
}

// -----------------------------------------------------------------------------
// Abstract transport (generic 0x0000-0x0004)
// -----------------------------------------------------------------------------
// Raised by the shared transport base before any concrete transport is
// involved.
define_error_codes! {
    Category::Generic => {
        CANNOT_INIT_ABSTRACT_TRANSPORT = 0x0000,
        PRE_DFU_INTERRUPTED            = 0x0001,
        UNEXPECTED_BYTES               = 0x0002,
        CRC_MISMATCH                   = 0x0003,
        TOO_MANY_WRITE_FAILURES        = 0x0004,
    }
}

// -----------------------------------------------------------------------------
// PRN transport (generic 0x0011-0x0018)
// -----------------------------------------------------------------------------
// Raised by the packet-receipt-notification layer shared by serial and BLE.
define_error_codes! {
    Category::Generic => {
        CANNOT_INIT_PRN_TRANSPORT   = 0x0011,
        READ_CONFLICT               = 0x0012,
        TIMEOUT_READING_SERIAL      = 0x0013,
        RECEIVE_TWO_MESSAGES        = 0x0014,
        RESPONSE_NOT_START_WITH_60  = 0x0015,
        ASSERT_EMPTY_RESPONSE       = 0x0016,
        UNEXPECTED_RESPONSE_OPCODE  = 0x0017,
        UNEXPECTED_RESPONSE_BYTES   = 0x0018,
    }
}

// -----------------------------------------------------------------------------
// Sink transport (generic 0x0031-0x0034)
// -----------------------------------------------------------------------------
define_error_codes! {
    Category::Generic => {
        MUST_HAVE_PAYLOAD          = 0x0031,
        INVOKED_MISMATCHED_CRC32   = 0x0032,
        MORE_BYTES_THAN_CHUNK_SIZE = 0x0033,
        INVALID_PAYLOAD_TYPE       = 0x0034,
    }
}

// -----------------------------------------------------------------------------
// BLE transport (generic 0x0051-0x0053)
// -----------------------------------------------------------------------------
define_error_codes! {
    Category::Generic => {
        CANNOT_DISCOVER_DFU_CONTROL      = 0x0051,
        TIMEOUT_FETCHING_CHARACTERISTICS = 0x0052,
        CANNOT_SUBSCRIBE_CHANGES         = 0x0053,
    }
}

// -----------------------------------------------------------------------------
// Serial/USB transport (generic 0x0071-0x0072)
// -----------------------------------------------------------------------------
define_error_codes! {
    Category::Generic => {
        UNKNOWN_FIRMWARE_TYPE = 0x0071,
        UNABLE_FIND_PORT      = 0x0072,
    }
}

// -----------------------------------------------------------------------------
// Response codes (0x0100-0x010A)
// -----------------------------------------------------------------------------
// Mirrored from the DFU target's protocol. 0x0101 (success) and the
// undocumented 0x0106/0x0109 have no constants: a success is not an error,
// and a constant without a shipped meaning would invite misuse.
define_error_codes! {
    Category::Response => {
        RSP_OPCODE_MISSING_MALFORMED = 0x0100,
        RSP_OPCODE_UNKNOWN           = 0x0102,
        RSP_PARAMETER_MISSING        = 0x0103,
        RSP_NOT_ENOUGH_MEMORY        = 0x0104,
        RSP_DATA_OBJECT_NOT_MATCH    = 0x0105,
        RSP_UNSUPPORTED_OBJECT_TYPE  = 0x0107,
        RSP_INCORRECT_STATE          = 0x0108,
        RSP_OPERATION_FAILED         = 0x010A,
    }
}

// -----------------------------------------------------------------------------
// Extended error codes (0x0200-0x020E)
// -----------------------------------------------------------------------------
// Mirrored from the DFU target's protocol; sent after response 0x0B.
define_error_codes! {
    Category::Extended => {
        EXT_ERROR_CODE_NOT_SET             = 0x0200,
        EXT_ERROR_CODE_INCORRECT           = 0x0201,
        EXT_COMMAND_FORMAT_INCORRECT       = 0x0203,
        EXT_COMMAND_PARSED_BUT_UNKNOWN     = 0x0204,
        EXT_FIRMWARE_VERSION_LOW           = 0x0205,
        EXT_HARDWARE_VERSION_NOT_MATCH     = 0x0206,
        EXT_SOFTDEVICE_NOT_CONTAINED       = 0x0207,
        EXT_INIT_PACKET_NO_SIGNATURE       = 0x0208,
        EXT_HASH_TYPE_NOT_SUPPORT          = 0x0209,
        EXT_FIRMWARE_HASH_CANNOT_CALCULATE = 0x020A,
        EXT_SIGNATURE_TYPE_NOT_SUPPORT     = 0x020B,
        EXT_FIRMWARE_HASH_NOT_MATCH        = 0x020C,
        EXT_SPACE_INSUFFICIENT             = 0x020D,
        EXT_FIRMWARE_ALREADY_PRESENT       = 0x020E,
    }
}
