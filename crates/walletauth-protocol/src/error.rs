//! Error types for the protocol layer.

/// Errors that can occur while encoding or decoding SDK data.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a Rust value into bytes).
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// The callback payload was not JSON at all.
    ///
    /// Payloads that are valid JSON but have missing or oddly typed fields
    /// are NOT decode errors; those fields simply come out empty.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),
}
