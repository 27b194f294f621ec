use thiserror::Error;

/// Decode failure. The contract exposes a single kind: the input was not a
/// complete, well-formed JSON document. Line/column detail from the
/// underlying parser is carried in the `Display` output.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("malformed json payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
