//! Unified error type for walletauth.

use walletauth_protocol::ProtocolError;
use walletauth_sdk::SdkError;
use walletauth_session::SessionError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant lets `?` convert sub-crate
/// errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum WalletAuthError {
    /// An SDK-boundary error (channel closed, config unreadable).
    #[error(transparent)]
    Sdk(#[from] SdkError),

    /// A protocol-level error (encode, decode).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A session-level error (initialization gate).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The driver feeding an [`AuthView`](crate::AuthView) has stopped.
    #[error("session driver stopped")]
    DriverStopped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sdk_error() {
        let err: WalletAuthError = SdkError::Closed.into();
        assert!(matches!(err, WalletAuthError::Sdk(_)));
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn test_from_protocol_error() {
        let json_err = serde_json::from_str::<u8>("x").unwrap_err();
        let err: WalletAuthError = ProtocolError::Decode(json_err).into();
        assert!(matches!(err, WalletAuthError::Protocol(_)));
        assert!(err.to_string().starts_with("decode failed"));
    }

    #[test]
    fn test_from_session_error() {
        let err: WalletAuthError = SessionError::NotInitialized.into();
        assert!(matches!(err, WalletAuthError::Session(_)));
        assert_eq!(err.to_string(), "session controller is not initialized");
    }

    #[test]
    fn test_driver_stopped_display() {
        assert_eq!(
            WalletAuthError::DriverStopped.to_string(),
            "session driver stopped"
        );
    }
}
