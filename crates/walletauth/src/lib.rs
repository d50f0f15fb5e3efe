//! # walletauth
//!
//! One authenticated "connected address" for an application shell, no
//! matter which wallet/identity SDK path produced it.
//!
//! The SDK reports login, signup and error outcomes through callbacks whose
//! payloads differ by authentication method. walletauth decodes those
//! callbacks, reduces them into a single [`AuthState`], and publishes
//! snapshots to read-only [`AuthView`]s for the UI.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use walletauth::prelude::*;
//!
//! # async fn demo() -> Result<(), WalletAuthError> {
//! let (sdk, handle) = ChannelSdk::new();
//! let driver = SessionDriverBuilder::new()
//!     .config(SdkConfig::default())
//!     .build(sdk);
//! let mut view = driver.subscribe();
//! tokio::spawn(driver.run());
//!
//! // The host binding forwards SDK readiness and callbacks:
//! handle.mark_initialized()?;
//! handle.login_success(r#"{"authMethod":"metamask_direct","username":"0x1"}"#)?;
//!
//! let state = view.changed().await?;
//! assert_eq!(state.address(), Some("0x1"));
//! # Ok(())
//! # }
//! ```

mod driver;
mod error;
mod view;

pub use driver::{SessionDriver, SessionDriverBuilder};
pub use error::WalletAuthError;
pub use view::AuthView;

pub use walletauth_protocol::{AuthEvent, AuthMethod, AuthPayload, Codec, JsonCodec};
pub use walletauth_sdk::{ChannelSdk, SdkClient, SdkConfig, SdkHandle};
pub use walletauth_session::{AuthState, AuthStatus, SessionController};

/// Installs a `tracing` subscriber that honors `RUST_LOG`.
///
/// Defaults to `info` when `RUST_LOG` is unset or invalid. Does nothing if
/// a global subscriber is already installed, so it is safe to call from
/// tests and binaries alike.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub mod prelude {
    //! The types most hosts need, in one import.

    pub use crate::{
        AuthState, AuthStatus, AuthView, ChannelSdk, SdkConfig, SdkHandle,
        SessionDriver, SessionDriverBuilder, WalletAuthError,
    };
}
