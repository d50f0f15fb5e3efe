//! The session reducer.

use walletauth_protocol::AuthEvent;

use crate::{resolve_address, AuthState};

/// Computes the state that follows `event`.
///
/// Last writer wins: the result depends only on the event, never on the
/// previous state, so applying the same event twice is the same as applying
/// it once. This function cannot fail.
pub fn reduce(_current: &AuthState, event: &AuthEvent) -> AuthState {
    match event {
        AuthEvent::LoginSuccess(payload) | AuthEvent::SignupSuccess(payload) => {
            AuthState::logged_in(resolve_address(payload))
        }
        AuthEvent::Error { .. } => AuthState::errored(),
        AuthEvent::Logout => AuthState::logged_out(),
    }
}
