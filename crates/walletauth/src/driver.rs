//! `SessionDriver` builder and signal loop.
//!
//! This is the adapter between the SDK and the session layer. It ties the
//! pieces together: sdk → protocol → session → views.
//!
//! The flow for each signal:
//!   1. `Initialized` → open the controller's gate with the configured SDK
//!      config
//!   2. `Callback` → decode (degrading undecodable payloads) → controller
//!      → publish the new snapshot to every [`AuthView`]
//!
//! Signals are processed strictly one at a time; nothing else touches the
//! controller.

use tokio::sync::watch;
use walletauth_protocol::{AuthEvent, Codec, JsonCodec};
use walletauth_sdk::{RawCallback, SdkClient, SdkConfig, SdkSignal};
use walletauth_session::{AuthState, SessionController, SessionError};

use crate::{AuthView, WalletAuthError};

/// Builder for configuring a [`SessionDriver`].
///
/// # Example
///
/// ```rust
/// use walletauth::{ChannelSdk, SdkConfig, SessionDriverBuilder};
///
/// let (sdk, _handle) = ChannelSdk::new();
/// let driver = SessionDriverBuilder::new()
///     .config(SdkConfig::from_json(r#"{"webauthn":{"enabled":false}}"#).unwrap())
///     .build(sdk);
///
/// assert!(!driver.subscribe().current().is_logged_in());
/// ```
#[derive(Debug, Clone)]
pub struct SessionDriverBuilder<C = JsonCodec> {
    config: SdkConfig,
    codec: C,
}

impl SessionDriverBuilder<JsonCodec> {
    /// Creates a builder with the default config and [`JsonCodec`].
    pub fn new() -> Self {
        Self {
            config: SdkConfig::default(),
            codec: JsonCodec,
        }
    }
}

impl Default for SessionDriverBuilder<JsonCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Codec> SessionDriverBuilder<C> {
    /// Sets the SDK configuration the controller is activated with.
    pub fn config(mut self, config: SdkConfig) -> Self {
        self.config = config;
        self
    }

    /// Swaps the payload codec.
    pub fn codec<C2: Codec>(self, codec: C2) -> SessionDriverBuilder<C2> {
        SessionDriverBuilder {
            config: self.config,
            codec,
        }
    }

    /// Builds a driver reading from `sdk`.
    pub fn build<S: SdkClient>(self, sdk: S) -> SessionDriver<S, C> {
        let (state_tx, _) = watch::channel(AuthState::logged_out());
        SessionDriver {
            sdk,
            codec: self.codec,
            config: self.config,
            controller: SessionController::new(),
            state_tx,
        }
    }
}

/// Feeds SDK signals into a [`SessionController`] and publishes the
/// results.
///
/// Call [`run()`](Self::run) to process signals until the SDK shuts down,
/// or [`step()`](Self::step) to process exactly one.
pub struct SessionDriver<S: SdkClient, C: Codec = JsonCodec> {
    sdk: S,
    codec: C,
    config: SdkConfig,
    controller: SessionController,
    state_tx: watch::Sender<AuthState>,
}

impl<S: SdkClient, C: Codec> SessionDriver<S, C> {
    /// Returns a new read-only view of the session.
    ///
    /// Views can be created before or after `run()` starts; each sees the
    /// latest published state.
    pub fn subscribe(&self) -> AuthView {
        AuthView::new(self.state_tx.subscribe())
    }

    /// The controller's current state.
    pub fn state(&self) -> &AuthState {
        self.controller.state()
    }

    /// Processes signals until the SDK shuts down.
    ///
    /// # Errors
    /// Returns [`WalletAuthError::Sdk`] if receiving from the SDK fails.
    /// Bad payloads and early callbacks are not errors.
    pub async fn run(mut self) -> Result<(), WalletAuthError> {
        tracing::info!("session driver running");
        while self.step().await? {}
        tracing::info!(
            final_state = %self.controller.state(),
            sdk_initialized = self.sdk.is_initialized(),
            "sdk closed, session driver stopped"
        );
        Ok(())
    }

    /// Processes a single signal.
    ///
    /// Returns `Ok(false)` once the SDK has shut down.
    pub async fn step(&mut self) -> Result<bool, WalletAuthError> {
        let Some(signal) = self.sdk.recv().await? else {
            return Ok(false);
        };

        match signal {
            SdkSignal::Initialized => self.activate()?,
            SdkSignal::Callback(raw) => self.apply(&raw),
        }
        Ok(true)
    }

    fn activate(&mut self) -> Result<(), SessionError> {
        if self.controller.is_active() {
            tracing::warn!("duplicate sdk initialized signal ignored");
            return Ok(());
        }
        self.controller.activate(self.config.clone())
    }

    fn apply(&mut self, raw: &RawCallback) {
        let event = match self.codec.decode_event(raw) {
            Ok(event) => event,
            Err(e) => {
                tracing::debug!(
                    kind = %raw.kind,
                    error = %e,
                    "undecodable sdk payload, degrading"
                );
                AuthEvent::from_undecodable(raw)
            }
        };

        match self.controller.handle(event) {
            Ok(state) => {
                let next = state.clone();
                self.state_tx.send_if_modified(|current| {
                    if *current == next {
                        return false;
                    }
                    *current = next;
                    true
                });
            }
            Err(e) => {
                tracing::debug!(
                    kind = %raw.kind,
                    error = %e,
                    sdk_initialized = self.sdk.is_initialized(),
                    "sdk callback dropped"
                );
            }
        }
    }
}
