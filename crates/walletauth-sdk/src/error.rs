/// Errors that can occur at the SDK boundary.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// The other side of the SDK channel is gone.
    #[error("sdk channel closed")]
    Closed,

    /// The SDK configuration could not be parsed.
    #[error("invalid sdk config: {0}")]
    Config(#[source] serde_json::Error),

    /// Reading the SDK configuration failed.
    #[error("sdk config io failed: {0}")]
    Io(#[source] std::io::Error),
}
