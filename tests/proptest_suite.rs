//! Property-based tests for dfu_errors
//!
//! These tests use proptest to generate random inputs and verify invariants
//! hold over the full 16-bit code domain.

use dfu_errors::{Category, ClassificationError, DfuError, ErrorCode, resolve, resolve_with_context};
use proptest::prelude::*;

// ============================================================================
// CLASSIFICATION PROPERTIES
// ============================================================================

proptest! {
    /// Splitting a code into category and detail bytes loses nothing.
    #[test]
    fn split_recomposes_exactly(raw in any::<u16>()) {
        let code = ErrorCode::new(raw);
        prop_assert_eq!(code.category_byte(), (raw >> 8) as u8);
        prop_assert_eq!(code.detail(), (raw & 0xFF) as u8);
        let recomposed = ((code.category_byte() as u16) << 8) | code.detail() as u16;
        prop_assert_eq!(recomposed, raw);
    }

    /// Codes in the three shipped categories never fail hard, whatever the
    /// detail byte says.
    #[test]
    fn known_categories_always_resolve(category in 0u8..=2, detail in any::<u8>()) {
        let code = ErrorCode::new(((category as u16) << 8) | detail as u16);
        let message = resolve(code);
        prop_assert!(message.is_ok());
    }

    /// Codes outside the shipped categories always fail hard, preserving the
    /// offending bytes, and never produce a string.
    #[test]
    fn unknown_categories_always_fail(category in 3u8..=255, detail in any::<u8>()) {
        let raw = ((category as u16) << 8) | detail as u16;
        let code = ErrorCode::new(raw);
        prop_assert_eq!(
            resolve(code),
            Err(ClassificationError { code: raw, category })
        );
        prop_assert!(DfuError::new(code).is_err());
    }

    /// Every successfully resolved message leads with its category label and
    /// the label/detail separator.
    #[test]
    fn resolved_messages_lead_with_the_label(category in 0u8..=2, detail in any::<u8>()) {
        let code = ErrorCode::new(((category as u16) << 8) | detail as u16);
        let label = Category::from_byte(category).unwrap().label();
        let message = resolve(code).unwrap();
        prop_assert!(message.starts_with(label));
        prop_assert!(message[label.len()..].starts_with(": "));
    }
}

// ============================================================================
// CONTEXT PROPERTIES
// ============================================================================

proptest! {
    /// Appending non-empty context is exactly `resolve(code) + " " + ctx`.
    #[test]
    fn context_appends_after_single_space(
        category in 0u8..=2,
        detail in any::<u8>(),
        context in "\\PC+",
    ) {
        let code = ErrorCode::new(((category as u16) << 8) | detail as u16);
        let plain = resolve(code).unwrap();
        let with_ctx = resolve_with_context(code, &context).unwrap();
        prop_assert_eq!(with_ctx, format!("{plain} {context}"));
    }

    /// Empty context is a no-op, matching producers that thread an optional
    /// context string through unconditionally.
    #[test]
    fn empty_context_is_identity(category in 0u8..=2, detail in any::<u8>()) {
        let code = ErrorCode::new(((category as u16) << 8) | detail as u16);
        prop_assert_eq!(resolve_with_context(code, ""), resolve(code));
    }
}

// ============================================================================
// ERROR VALUE PROPERTIES
// ============================================================================

proptest! {
    /// Same code and context in, identical value out.
    #[test]
    fn construction_is_idempotent(
        category in 0u8..=2,
        detail in any::<u8>(),
        context in "\\PC*",
    ) {
        let code = ErrorCode::new(((category as u16) << 8) | detail as u16);
        let a = DfuError::with_context(code, &context).unwrap();
        let b = DfuError::with_context(code, &context).unwrap();
        prop_assert_eq!(a.message(), b.message());
        prop_assert_eq!(a, b);
    }

    /// The code survives construction verbatim, even for details with no
    /// registry text.
    #[test]
    fn code_is_preserved_verbatim(category in 0u8..=2, detail in any::<u8>()) {
        let raw = ((category as u16) << 8) | detail as u16;
        let err = DfuError::new(ErrorCode::new(raw)).unwrap();
        prop_assert_eq!(err.code().raw(), raw);
        prop_assert_eq!(err.detail(), detail);
    }

    /// Display and message agree, for arbitrary codes and contexts.
    #[test]
    fn display_equals_message(
        category in 0u8..=2,
        detail in any::<u8>(),
        context in "\\PC*",
    ) {
        let code = ErrorCode::new(((category as u16) << 8) | detail as u16);
        let err = DfuError::with_context(code, &context).unwrap();
        prop_assert_eq!(err.to_string(), err.message());
    }

    /// Construction never panics anywhere in the u16 domain, with arbitrary
    /// context text.
    #[test]
    fn construction_never_panics(raw in any::<u16>(), context in "\\PC*") {
        let _ = DfuError::new(ErrorCode::new(raw));
        let _ = DfuError::with_context(ErrorCode::new(raw), &context);
        let _ = resolve(ErrorCode::new(raw));
    }
}

// ============================================================================
// LOG ENTRY PROPERTIES
// ============================================================================

proptest! {
    /// The structured entry always reports the same bytes as the code split.
    #[test]
    fn log_entry_matches_the_split(category in 0u8..=2, detail in any::<u8>()) {
        let code = ErrorCode::new(((category as u16) << 8) | detail as u16);
        let err = DfuError::new(code).unwrap();
        let entry = err.log_entry();
        prop_assert_eq!(entry.category_byte(), category);
        prop_assert_eq!(entry.detail(), detail);

        let mut line = String::new();
        entry.write_to(&mut line).unwrap();
        let expected_prefix = format!("[{code}]");
        let expected_suffix = format!("message='{}'", err.message());
        prop_assert!(line.starts_with(&expected_prefix));
        prop_assert!(line.ends_with(&expected_suffix));
    }
}
