//! The session controller: the single owner of the live [`AuthState`].
//!
//! The controller wraps the pure [`reduce`] function with two things the
//! reducer can't know about:
//!
//! - **The initialization gate.** Configuration can only be resolved once
//!   the host environment is fully up. Until [`activate`] is called with
//!   that configuration, every event is refused and the state stays at its
//!   initial value.
//! - **Diagnostics.** Each transition is logged, and an event whose method
//!   the configuration has switched off is logged as suspicious. It is
//!   still applied; the toggles are the SDK's business, not ours.
//!
//! # Concurrency note
//!
//! `SessionController` is a plain struct with `&mut self` methods. It is
//! owned by a single task that feeds it events one at a time; readers get
//! snapshots, never a reference to the live state.
//!
//! [`activate`]: SessionController::activate

use walletauth_protocol::{AuthEvent, AuthPayload};
use walletauth_sdk::SdkConfig;

use crate::{reduce, AuthState, SessionError};

/// Owns the session's [`AuthState`] and applies events to it.
///
/// ## Lifecycle
///
/// ```text
/// new() ──→ [gate closed] ──activate(config)──→ [gate open]
///               │                                    │
///        events rejected,                     handle(event) ──→ reduce()
///        state untouched                             │
///                                              state replaced
/// ```
#[derive(Debug, Default)]
pub struct SessionController {
    state: AuthState,

    /// `None` until the gate opens.
    config: Option<SdkConfig>,
}

impl SessionController {
    /// Creates a controller in the `LoggedOut` state with its gate closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the initialization gate with the resolved SDK configuration.
    ///
    /// # Errors
    /// Returns [`SessionError::AlreadyActive`] if the gate is already open.
    /// The stored configuration is not replaced in that case.
    pub fn activate(&mut self, config: SdkConfig) -> Result<(), SessionError> {
        if self.config.is_some() {
            return Err(SessionError::AlreadyActive);
        }
        tracing::info!(
            peers = config.peers.len(),
            metamask = config.metamask.enabled,
            webauthn = config.webauthn.enabled,
            "session controller activated"
        );
        self.config = Some(config);
        Ok(())
    }

    /// Returns `true` once [`activate`](Self::activate) has succeeded.
    pub fn is_active(&self) -> bool {
        self.config.is_some()
    }

    /// The configuration passed to `activate`, if any.
    ///
    /// Not used by the reducer; hosts read it back to show which methods
    /// the SDK was started with.
    pub fn config(&self) -> Option<&SdkConfig> {
        self.config.as_ref()
    }

    /// Applies a login-success outcome.
    ///
    /// # Errors
    /// [`SessionError::NotInitialized`] before the gate opens.
    pub fn on_login_success(
        &mut self,
        payload: AuthPayload,
    ) -> Result<&AuthState, SessionError> {
        self.handle(AuthEvent::LoginSuccess(payload))
    }

    /// Applies a signup-success outcome. Same contract as
    /// [`on_login_success`](Self::on_login_success).
    pub fn on_signup_success(
        &mut self,
        payload: AuthPayload,
    ) -> Result<&AuthState, SessionError> {
        self.handle(AuthEvent::SignupSuccess(payload))
    }

    /// Applies an SDK error. Clears any established login.
    pub fn on_error(
        &mut self,
        message: impl Into<String>,
    ) -> Result<&AuthState, SessionError> {
        self.handle(AuthEvent::error(message))
    }

    /// Applies an explicit sign-out.
    pub fn on_logout(&mut self) -> Result<&AuthState, SessionError> {
        self.handle(AuthEvent::Logout)
    }

    /// Applies any event and returns the new state.
    ///
    /// # Errors
    /// [`SessionError::NotInitialized`] before the gate opens; the state is
    /// left exactly as it was.
    pub fn handle(&mut self, event: AuthEvent) -> Result<&AuthState, SessionError> {
        let Some(config) = &self.config else {
            tracing::debug!(kind = %event.kind(), "event before activation rejected");
            return Err(SessionError::NotInitialized);
        };

        if let AuthEvent::LoginSuccess(payload) | AuthEvent::SignupSuccess(payload) = &event {
            if !payload.auth_method.permitted_by(config) {
                tracing::warn!(
                    method = %payload.auth_method,
                    "success event for a method disabled in sdk config"
                );
            }
        }

        let next = reduce(&self.state, &event);
        match &event {
            AuthEvent::LoginSuccess(payload) | AuthEvent::SignupSuccess(payload) => {
                tracing::info!(
                    kind = %event.kind(),
                    method = %payload.auth_method,
                    address = next.address().unwrap_or_default(),
                    "authenticated"
                );
            }
            AuthEvent::Error { message } => {
                tracing::warn!(%message, previous = %self.state, "sdk reported an error");
            }
            AuthEvent::Logout => {
                tracing::info!(previous = %self.state, "signed out");
            }
        }

        self.state = next;
        Ok(&self.state)
    }

    /// The current state.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// An owned copy of the current state, for handing to readers.
    pub fn snapshot(&self) -> AuthState {
        self.state.clone()
    }
}

// =========================================================================
// Tests
// =========================================================================
