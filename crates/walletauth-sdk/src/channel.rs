//! In-process SDK implementation backed by an unbounded tokio channel.
//!
//! The host binding owns an [`SdkHandle`] and forwards whatever the real SDK
//! emits; walletauth owns the [`ChannelSdk`] and reads signals from it. The
//! channel is unbounded because SDK callbacks fire synchronously and must
//! never block the SDK's own dispatch.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{CallbackKind, RawCallback, SdkClient, SdkError, SdkSignal};

/// A callback closure that can be handed to an SDK's registration API.
pub type Callback = Arc<dyn Fn(&[u8]) + Send + Sync>;

/// The three outcome callbacks an SDK expects to be registered with.
///
/// Each closure forwards the payload bytes into the channel. Send errors
/// (walletauth already stopped) are logged and swallowed, since an SDK
/// callback has no way to report them.
///
/// Every closure holds its own [`SdkHandle`] clone, so the [`ChannelSdk`]
/// stays open until the whole bundle (every field, and every clone of it)
/// has been dropped. Hosts that move only some of the fields into another
/// closure keep the rest alive in the original scope.
#[derive(Clone)]
pub struct SdkCallbacks {
    pub on_login_success: Callback,
    pub on_signup_success: Callback,
    pub on_error: Callback,
}

impl std::fmt::Debug for SdkCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkCallbacks").finish_non_exhaustive()
    }
}

/// The receiving half: implements [`SdkClient`].
#[derive(Debug)]
pub struct ChannelSdk {
    rx: mpsc::UnboundedReceiver<SdkSignal>,
    initialized: bool,
}

/// The emitting half, held by the host binding.
///
/// Cheap to clone; the [`ChannelSdk`] reports shutdown once every handle
/// has been dropped, including the clones captured by [`SdkCallbacks`]
/// built from [`SdkHandle::callbacks`].
#[derive(Debug, Clone)]
pub struct SdkHandle {
    tx: mpsc::UnboundedSender<SdkSignal>,
}

impl ChannelSdk {
    /// Creates a connected client/handle pair.
    pub fn new() -> (Self, SdkHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                rx,
                initialized: false,
            },
            SdkHandle { tx },
        )
    }
}

impl SdkClient for ChannelSdk {
    async fn recv(&mut self) -> Result<Option<SdkSignal>, SdkError> {
        let signal = self.rx.recv().await;
        if matches!(signal, Some(SdkSignal::Initialized)) {
            self.initialized = true;
        }
        Ok(signal)
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl SdkHandle {
    /// Signals that the host environment is ready.
    pub fn mark_initialized(&self) -> Result<(), SdkError> {
        self.send(SdkSignal::Initialized)
    }

    /// Emits a login-success callback with the given JSON payload.
    pub fn login_success(&self, data: impl Into<Vec<u8>>) -> Result<(), SdkError> {
        self.emit(CallbackKind::LoginSuccess, data)
    }

    /// Emits a signup-success callback with the given JSON payload.
    pub fn signup_success(&self, data: impl Into<Vec<u8>>) -> Result<(), SdkError> {
        self.emit(CallbackKind::SignupSuccess, data)
    }

    /// Emits an error callback with the given JSON payload.
    pub fn error(&self, data: impl Into<Vec<u8>>) -> Result<(), SdkError> {
        self.emit(CallbackKind::Error, data)
    }

    /// Emits an explicit sign-out.
    pub fn logout(&self) -> Result<(), SdkError> {
        self.emit(CallbackKind::Logout, Vec::new())
    }

    /// Emits an arbitrary callback.
    pub fn emit(
        &self,
        kind: CallbackKind,
        data: impl Into<Vec<u8>>,
    ) -> Result<(), SdkError> {
        self.send(SdkSignal::Callback(RawCallback::new(kind, data)))
    }

    /// Builds the closure bundle for SDKs that register callbacks.
    pub fn callbacks(&self) -> SdkCallbacks {
        SdkCallbacks {
            on_login_success: self.forwarder(CallbackKind::LoginSuccess),
            on_signup_success: self.forwarder(CallbackKind::SignupSuccess),
            on_error: self.forwarder(CallbackKind::Error),
        }
    }

    /// Returns `true` if the [`ChannelSdk`] has been dropped.
    ///
    /// Host bindings can poll this to unregister their SDK callbacks once
    /// walletauth has stopped listening.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    fn forwarder(&self, kind: CallbackKind) -> Callback {
        let handle = self.clone();
        Arc::new(move |data: &[u8]| {
            if let Err(e) = handle.emit(kind, data) {
                tracing::debug!(%kind, error = %e, "dropping sdk callback");
            }
        })
    }

    fn send(&self, signal: SdkSignal) -> Result<(), SdkError> {
        self.tx.send(signal).map_err(|_| SdkError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recv_initialized_sets_flag() {
        let (mut sdk, handle) = ChannelSdk::new();
        assert!(!sdk.is_initialized());

        handle.mark_initialized().unwrap();
        let signal = sdk.recv().await.unwrap();

        assert_eq!(signal, Some(SdkSignal::Initialized));
        assert!(sdk.is_initialized());
    }

    #[tokio::test]
    async fn test_recv_callback_before_init_leaves_flag_unset() {
        let (mut sdk, handle) = ChannelSdk::new();
        handle.error(r#"{"message":"early"}"#).unwrap();

        let signal = sdk.recv().await.unwrap();

        assert!(matches!(
            signal,
            Some(SdkSignal::Callback(RawCallback { kind: CallbackKind::Error, .. }))
        ));
        assert!(!sdk.is_initialized());
    }

    #[tokio::test]
    async fn test_recv_all_handles_dropped_returns_none() {
        let (mut sdk, handle) = ChannelSdk::new();
        let second = handle.clone();
        drop(handle);
        drop(second);

        assert_eq!(sdk.recv().await.unwrap(), None);
    }

    #[test]
    fn test_emit_after_client_dropped_returns_closed() {
        let (sdk, handle) = ChannelSdk::new();
        drop(sdk);

        assert!(handle.is_closed());
        assert!(matches!(handle.logout(), Err(SdkError::Closed)));
    }

    #[tokio::test]
    async fn test_callbacks_forward_payload_bytes() {
        let (mut sdk, handle) = ChannelSdk::new();
        let callbacks = handle.callbacks();

        (callbacks.on_signup_success)(b"{}");

        let signal = sdk.recv().await.unwrap();
        assert_eq!(
            signal,
            Some(SdkSignal::Callback(RawCallback::new(
                CallbackKind::SignupSuccess,
                "{}"
            )))
        );
    }

    #[test]
    fn test_callbacks_after_client_dropped_do_not_panic() {
        let (sdk, handle) = ChannelSdk::new();
        let callbacks = handle.callbacks();
        drop(sdk);

        (callbacks.on_error)(b"{}");
    }
}
