//! pod::document
//!
//! The newline-delimited document codec.
//!
//! A document is an ordered sequence of values stored as one value per
//! line: the string form of each value followed by `\n`, in sequence
//! order, with a trailing newline after the final value.
//!
//! No escaping is performed. A value containing an embedded newline
//! corrupts the document structure: it decodes as multiple values. This
//! is a known defect boundary of the wire format, kept as-is rather than
//! papered over with guessed escaping rules.

use std::fmt::Display;

/// Encode values into a newline-delimited document.
///
/// `["one", 2, true]` encodes to `"one\n2\ntrue\n"`. An empty slice
/// encodes to the empty string.
///
/// # Example
///
/// ```
/// use podlink::pod::document::encode;
///
/// assert_eq!(encode(&["one", "2", "true"]), "one\n2\ntrue\n");
/// assert_eq!(encode::<&str>(&[]), "");
/// ```
pub fn encode<T: Display>(values: &[T]) -> String {
    let mut out = String::new();
    for value in values {
        out.push_str(&value.to_string());
        out.push('\n');
    }
    out
}

/// Decode a newline-delimited document into its values.
///
/// Splits on `\n` and drops trailing empty entries, so the trailing
/// newline written by [`encode`] does not produce a phantom empty value.
/// The empty document decodes to an empty sequence.
///
/// For any value sequence without embedded newlines and without trailing
/// empty values, `decode(&encode(values))` yields the values' string
/// forms in the original order.
///
/// # Example
///
/// ```
/// use podlink::pod::document::decode;
///
/// assert_eq!(decode("one\n2\ntrue\n"), vec!["one", "2", "true"]);
/// assert_eq!(decode(""), Vec::<String>::new());
/// ```
pub fn decode(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = text.split('\n').map(str::to_string).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}
