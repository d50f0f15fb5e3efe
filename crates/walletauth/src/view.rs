//! Read-only session views for the presentation layer.

use tokio::sync::watch;
use walletauth_protocol::Codec;
use walletauth_session::AuthState;

use crate::WalletAuthError;

/// A read-only handle on the session published by a
/// [`SessionDriver`](crate::SessionDriver).
///
/// Views never block the driver; each one just holds the latest snapshot.
/// Cloning a view is cheap and the clone tracks changes independently.
#[derive(Debug, Clone)]
pub struct AuthView {
    rx: watch::Receiver<AuthState>,
}

impl AuthView {
    pub(crate) fn new(rx: watch::Receiver<AuthState>) -> Self {
        Self { rx }
    }

    /// The latest published state.
    pub fn current(&self) -> AuthState {
        self.rx.borrow().clone()
    }

    /// The address to show in a "connected address" label.
    ///
    /// See [`AuthState::display_address`]; `fallback` is the host's own
    /// wallet connection, if any.
    pub fn display_address(&self, fallback: Option<&str>) -> Option<String> {
        self.rx.borrow().display_address(fallback).map(str::to_owned)
    }

    /// Waits until the state changes, then returns the new state.
    ///
    /// # Errors
    /// Returns [`WalletAuthError::DriverStopped`] once the driver is gone
    /// and no further changes can arrive.
    pub async fn changed(&mut self) -> Result<AuthState, WalletAuthError> {
        self.rx
            .changed()
            .await
            .map_err(|_| WalletAuthError::DriverStopped)?;
        Ok(self.rx.borrow_and_update().clone())
    }

    /// Encodes the latest state with `codec`, for hosts that hand the
    /// session to another process or a web view.
    pub fn encode<C: Codec>(&self, codec: &C) -> Result<Vec<u8>, WalletAuthError> {
        let state = self.current();
        Ok(codec.encode(&state)?)
    }
}

#[cfg(test)]
mod tests {
    use walletauth_protocol::JsonCodec;

    use super::*;

    #[test]
    fn test_current_reflects_latest_send() {
        let (tx, rx) = watch::channel(AuthState::logged_out());
        let view = AuthView::new(rx);

        tx.send_replace(AuthState::logged_in("0x1"));

        assert_eq!(view.current(), AuthState::logged_in("0x1"));
    }

    #[test]
    fn test_display_address_falls_back_when_not_logged_in() {
        let (tx, rx) = watch::channel(AuthState::logged_out());
        let view = AuthView::new(rx);

        assert_eq!(view.display_address(Some("0xHOST")).as_deref(), Some("0xHOST"));

        tx.send_replace(AuthState::logged_in("pub1"));
        assert_eq!(view.display_address(Some("0xHOST")).as_deref(), Some("pub1"));

        tx.send_replace(AuthState::errored());
        assert_eq!(view.display_address(None), None);
    }

    #[tokio::test]
    async fn test_changed_returns_new_state() {
        let (tx, rx) = watch::channel(AuthState::logged_out());
        let mut view = AuthView::new(rx);

        tx.send_replace(AuthState::errored());

        assert_eq!(view.changed().await.unwrap(), AuthState::errored());
    }

    #[tokio::test]
    async fn test_changed_after_sender_dropped_returns_driver_stopped() {
        let (tx, rx) = watch::channel(AuthState::logged_out());
        let mut view = AuthView::new(rx);
        drop(tx);

        let result = view.changed().await;

        assert!(matches!(result, Err(WalletAuthError::DriverStopped)));
    }

    #[test]
    fn test_encode_uses_codec() {
        let (_tx, rx) = watch::channel(AuthState::logged_in("0x1"));
        let view = AuthView::new(rx);

        let bytes = view.encode(&JsonCodec).unwrap();

        assert_eq!(bytes, br#"{"status":"logged_in","address":"0x1"}"#);
    }
}
