//! Encode/decode entrypoints between [`serde_json::Value`] and JSON text.
//!
//! Every call is stateless and independent: nothing is retained after a call
//! returns, so concurrent use from multiple threads is safe as long as each
//! call operates on its own inputs and outputs.

use std::fmt::Write as _;

use serde_json::Value;

use crate::error::JsonError;

/// Serialize `value` as compact JSON text into `out`.
///
/// Out-parameter form: any prior contents of `out` are discarded, and on
/// return `out` holds exactly the serialization of `value`. This is a total
/// operation; every `Value` is representable as JSON text.
///
/// # Example
///
/// ```
/// let value = serde_json::json!({"a": 1, "b": [true, null]});
/// let mut out = String::from("stale");
/// json_codec::encode(&value, &mut out);
/// assert_eq!(out, r#"{"a":1,"b":[true,null]}"#);
/// ```
pub fn encode(value: &Value, out: &mut String) {
    out.clear();
    // fmt::Write into a String cannot fail.
    let _ = write!(out, "{value}");
}

/// Owned-return convenience over [`encode`].
pub fn encode_to_string(value: &Value) -> String {
    let mut out = String::new();
    encode(value, &mut out);
    out
}

/// Parse a raw byte buffer into a JSON value.
///
/// All-or-nothing: the buffer must hold exactly one complete JSON document
/// (surrounding whitespace allowed). Truncated input, trailing garbage,
/// invalid UTF-8, and empty or whitespace-only buffers all fail.
///
/// # Example
///
/// ```
/// let value = json_codec::decode(b"\"hello\"").unwrap();
/// assert_eq!(value, serde_json::json!("hello"));
/// assert!(json_codec::decode(b"").is_err());
/// ```
pub fn decode(bytes: &[u8]) -> Result<Value, JsonError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Parse a string slice into a JSON value. Same contract as [`decode`],
/// minus the UTF-8 failure mode.
pub fn decode_str(text: &str) -> Result<Value, JsonError> {
    Ok(serde_json::from_str(text)?)
}

/// Combined encoder/decoder pair over [`serde_json::Value`].
///
/// Stateless; exists for callers that want a codec object to pass around
/// rather than free functions.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonValueCodec;

impl JsonValueCodec {
    pub fn new() -> Self {
        Self
    }

    pub fn encode(&self, value: &Value, out: &mut String) {
        encode(value, out)
    }

    pub fn encode_to_string(&self, value: &Value) -> String {
        encode_to_string(value)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Value, JsonError> {
        decode(bytes)
    }

    pub fn decode_str(&self, text: &str) -> Result<Value, JsonError> {
        decode_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encode_replaces_destination_contents() {
        let mut out = String::from("previous contents");
        encode(&json!(null), &mut out);
        assert_eq!(out, "null");
    }

    #[test]
    fn encode_scalars() {
        assert_eq!(encode_to_string(&json!(true)), "true");
        assert_eq!(encode_to_string(&json!(-42)), "-42");
        assert_eq!(encode_to_string(&json!("a\"b")), r#""a\"b""#);
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        assert!(decode(&[0x22, 0xff, 0x22]).is_err());
    }

    #[test]
    fn decode_allows_surrounding_whitespace_only_around_a_document() {
        assert_eq!(decode(b"  7 \n").unwrap(), json!(7));
        assert!(decode(b"7 7").is_err());
    }

    #[test]
    fn codec_object_delegates_to_free_functions() {
        let codec = JsonValueCodec::new();
        let value = json!({"k": [1, 2]});
        let text = codec.encode_to_string(&value);
        assert_eq!(codec.decode_str(&text).unwrap(), value);
        assert_eq!(codec.decode(text.as_bytes()).unwrap(), value);
    }
}
