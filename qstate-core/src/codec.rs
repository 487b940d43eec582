//! Percent encoding for values stored in the query mapping
//!
//! Everything except ASCII alphanumerics and `- _ . ~` is escaped, matching
//! the platform's URI component rules.

use crate::value::Scalar;
use std::borrow::Cow;

/// Encode a scalar for storage in the query mapping.
pub fn encode(value: &Scalar) -> String {
    encode_str(&value.to_text())
}

pub fn encode_str(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Decode a stored value.
///
/// Never fails: byte sequences that do not form valid UTF-8 after unescaping
/// are replaced with U+FFFD, and malformed escapes pass through verbatim.
pub fn decode(encoded: &str) -> String {
    match urlencoding::decode(encoded) {
        Ok(Cow::Borrowed(s)) => s.to_string(),
        Ok(Cow::Owned(s)) => s,
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(encoded.as_bytes()))
            .into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_pass_through() {
        assert_eq!(encode_str("abcXYZ019-_.~"), "abcXYZ019-_.~");
    }

    #[test]
    fn test_reserved_are_escaped() {
        assert_eq!(encode_str("a b"), "a%20b");
        assert_eq!(encode_str("?&=#/%"), "%3F%26%3D%23%2F%25");
    }

    #[test]
    fn test_round_trip() {
        for text in [
            "",
            "plain",
            "with space",
            "100% sure",
            "a&b=c",
            "path/to#frag?x",
            "ünïcödé ✓",
            "line\nbreak\ttab",
            "+plus+",
        ] {
            assert_eq!(decode(&encode_str(text)), text, "round trip failed for {text:?}");
        }
    }

    #[test]
    fn test_round_trip_scalars() {
        assert_eq!(decode(&encode(&Scalar::from(12))), "12");
        assert_eq!(decode(&encode(&Scalar::from(-2.5))), "-2.5");
        assert_eq!(decode(&encode(&Scalar::from(true))), "true");
    }

    #[test]
    fn test_decode_is_total() {
        assert_eq!(decode("%"), "%");
        assert_eq!(decode("%zz"), "%zz");
        assert_eq!(decode("%FF"), "\u{FFFD}");
    }
}
