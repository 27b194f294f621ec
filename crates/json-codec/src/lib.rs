//! Stateless codec between in-memory JSON values and UTF-8 JSON text.
//!
//! The value representation is [`serde_json::Value`] with the
//! `preserve_order` feature, so object keys keep their insertion order
//! across an encode/decode round trip.
//!
//! Three operations make up the whole surface:
//! - [`encode`] — value to compact JSON text, written into a caller-supplied
//!   `String` (total, no error path)
//! - [`decode`] — raw byte buffer to value, all-or-nothing
//! - [`decode_str`] — string slice to value, same contract
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let value = json!({"a": 1, "b": [true, null]});
//! let mut text = String::new();
//! json_codec::encode(&value, &mut text);
//! assert_eq!(text, r#"{"a":1,"b":[true,null]}"#);
//!
//! let back = json_codec::decode(text.as_bytes()).unwrap();
//! assert_eq!(back, value);
//!
//! assert!(json_codec::decode_str(r#"{"x": }"#).is_err());
//! ```

mod codec;
mod error;

pub use codec::{decode, decode_str, encode, encode_to_string, JsonValueCodec};
pub use error::JsonError;
