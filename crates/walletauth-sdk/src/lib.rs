//! SDK boundary for walletauth.
//!
//! The identity SDK (wallet connectivity, relay peers, passkeys) lives
//! outside this workspace. This crate describes the narrow surface the rest
//! of walletauth needs from it:
//!
//! - [`SdkClient`] — a stream of [`SdkSignal`]s: one `Initialized` signal
//!   once the host is ready, then raw outcome callbacks.
//! - [`ChannelSdk`] / [`SdkHandle`] — an in-process implementation backed
//!   by a tokio channel. Host bindings (and tests) hold the handle and push
//!   callbacks into it.
//! - [`SdkConfig`] — the configuration handed to the SDK (relay peers,
//!   per-method toggles). walletauth passes it through untouched.
//!
//! Payloads stay as raw bytes here. Turning them into typed events is the
//! protocol crate's job.

mod channel;
mod config;
mod error;

pub use channel::{Callback, ChannelSdk, SdkCallbacks, SdkHandle};
pub use config::{MethodToggle, SdkConfig};
pub use error::SdkError;

use std::fmt;

/// Which SDK callback produced a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    LoginSuccess,
    SignupSuccess,
    Error,
    Logout,
}

impl fmt::Display for CallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoginSuccess => write!(f, "login_success"),
            Self::SignupSuccess => write!(f, "signup_success"),
            Self::Error => write!(f, "error"),
            Self::Logout => write!(f, "logout"),
        }
    }
}

/// An undecoded SDK callback: the callback kind plus the JSON payload the
/// SDK passed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCallback {
    pub kind: CallbackKind,
    pub data: Vec<u8>,
}

impl RawCallback {
    pub fn new(kind: CallbackKind, data: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            data: data.into(),
        }
    }
}

/// Everything an [`SdkClient`] can deliver, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkSignal {
    /// The host environment finished initializing and the SDK is usable.
    Initialized,

    /// One outcome callback fired.
    Callback(RawCallback),
}

/// The collaborator SDK as seen from walletauth.
///
/// Implementations deliver signals strictly in the order the SDK emitted
/// them. walletauth never calls back into the SDK.
pub trait SdkClient: Send + 'static {
    /// Waits for the next signal.
    ///
    /// Returns `Ok(None)` once the SDK has shut down and no further
    /// signals will arrive.
    fn recv(
        &mut self,
    ) -> impl std::future::Future<Output = Result<Option<SdkSignal>, SdkError>>
    + Send;

    /// Returns `true` once an [`SdkSignal::Initialized`] has been received.
    fn is_initialized(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_kind_display_uses_snake_case() {
        assert_eq!(CallbackKind::LoginSuccess.to_string(), "login_success");
        assert_eq!(CallbackKind::SignupSuccess.to_string(), "signup_success");
        assert_eq!(CallbackKind::Error.to_string(), "error");
        assert_eq!(CallbackKind::Logout.to_string(), "logout");
    }

    #[test]
    fn test_raw_callback_new_accepts_str_and_vec() {
        let a = RawCallback::new(CallbackKind::Error, "boom");
        let b = RawCallback::new(CallbackKind::Error, b"boom".to_vec());
        assert_eq!(a, b);
        assert_eq!(a.data, b"boom");
    }
}
