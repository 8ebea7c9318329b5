//! Property-based tests for the document codec.
//!
//! These tests use proptest to verify the codec invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use podlink::pod::document::{decode, encode};

/// Strategy for generating values that are safe on the wire: non-empty
/// and free of embedded newlines (the codec performs no escaping).
fn wire_safe_value() -> impl Strategy<Value = String> {
    "[^\n]+"
}

/// Strategy for generating value sequences.
fn wire_safe_values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(wire_safe_value(), 0..16)
}

proptest! {
    /// decode(encode(v)) yields the values in original order.
    #[test]
    fn round_trip_preserves_values(values in wire_safe_values()) {
        prop_assert_eq!(decode(&encode(&values)), values);
    }

    /// The wire form is exactly one value per line with a trailing newline.
    #[test]
    fn encoded_form_is_line_per_value(values in wire_safe_values()) {
        let encoded = encode(&values);
        if values.is_empty() {
            prop_assert_eq!(encoded, "");
        } else {
            prop_assert!(encoded.ends_with('\n'));
            prop_assert_eq!(encoded.matches('\n').count(), values.len());
        }
    }

    /// Encoding a concatenation equals concatenating the encodings. This is
    /// what makes the read-merge-write update equal to appending on the wire.
    #[test]
    fn encode_distributes_over_concatenation(
        old in wire_safe_values(),
        new in wire_safe_values(),
    ) {
        let mut all = old.clone();
        all.extend(new.iter().cloned());
        prop_assert_eq!(encode(&all), format!("{}{}", encode(&old), encode(&new)));
    }
}
