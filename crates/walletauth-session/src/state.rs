//! Session state: the normalized view every other component reads.
//!
//! An [`AuthState`] answers exactly two questions: is someone signed in,
//! and if so, what is their address. Which SDK path got them there is
//! already resolved away by the time a state exists.

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// AuthStatus
// ---------------------------------------------------------------------------

/// Where the session currently stands.
///
/// ```text
///   (any) ──LoginSuccess / SignupSuccess──→ LoggedIn
///   (any) ──Error─────────────────────────→ Errored
///   (any) ──Logout────────────────────────→ LoggedOut
/// ```
///
/// Every event is accepted in every state; there is no terminal state.
/// Re-entering the current state (two logins in a row, say) is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    /// Nobody signed in yet, or the user signed out.
    #[default]
    LoggedOut,

    /// A login or signup succeeded.
    LoggedIn,

    /// The SDK reported a failure. Displayed the same as `LoggedOut`.
    Errored,
}

impl fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoggedOut => write!(f, "LoggedOut"),
            Self::LoggedIn => write!(f, "LoggedIn"),
            Self::Errored => write!(f, "Errored"),
        }
    }
}

// ---------------------------------------------------------------------------
// AuthState
// ---------------------------------------------------------------------------

/// Session status plus the resolved address.
///
/// The address is present iff the status is `LoggedIn`. The fields are
/// private and the only constructors are [`logged_out`](Self::logged_out),
/// [`logged_in`](Self::logged_in) and [`errored`](Self::errored), so no
/// other combination can be built.
///
/// An empty string is a valid, present address: it is what a login with a
/// missing address field resolves to.
///
/// Serializes as `{"status":"logged_in","address":"0x1"}`, omitting
/// `address` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct AuthState {
    status: AuthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl AuthState {
    /// The initial state.
    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn logged_in(address: impl Into<String>) -> Self {
        Self {
            status: AuthStatus::LoggedIn,
            address: Some(address.into()),
        }
    }

    pub fn errored() -> Self {
        Self {
            status: AuthStatus::Errored,
            address: None,
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    /// The resolved address, present only while logged in.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.status == AuthStatus::LoggedIn
    }

    /// The address a "connected address" label should show.
    ///
    /// While logged in that's the session address, even if it is empty.
    /// Otherwise (`LoggedOut` or `Errored`) the host's own wallet
    /// connection, if it has one, is shown instead.
    pub fn display_address<'a>(&'a self, fallback: Option<&'a str>) -> Option<&'a str> {
        match self.status {
            AuthStatus::LoggedIn => self.address(),
            AuthStatus::LoggedOut | AuthStatus::Errored => fallback,
        }
    }
}

impl fmt::Display for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.address {
            Some(address) => write!(f, "{}({address:?})", self.status),
            None => write!(f, "{}", self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_out_is_default_with_no_address() {
        let state = AuthState::logged_out();
        assert_eq!(state, AuthState::default());
        assert_eq!(state.status(), AuthStatus::LoggedOut);
        assert_eq!(state.address(), None);
        assert!(!state.is_logged_in());
    }

    #[test]
    fn test_logged_in_carries_address() {
        let state = AuthState::logged_in("0xABC");
        assert_eq!(state.status(), AuthStatus::LoggedIn);
        assert_eq!(state.address(), Some("0xABC"));
        assert!(state.is_logged_in());
    }

    #[test]
    fn test_logged_in_empty_address_is_present() {
        let state = AuthState::logged_in("");
        assert_eq!(state.address(), Some(""));
    }

    #[test]
    fn test_errored_has_no_address() {
        let state = AuthState::errored();
        assert_eq!(state.status(), AuthStatus::Errored);
        assert_eq!(state.address(), None);
    }

    #[test]
    fn test_display_address_logged_in_ignores_fallback() {
        let state = AuthState::logged_in("pub1");
        assert_eq!(state.display_address(Some("0xWAGMI")), Some("pub1"));
    }

    #[test]
    fn test_display_address_logged_in_empty_still_wins() {
        let state = AuthState::logged_in("");
        assert_eq!(state.display_address(Some("0xWAGMI")), Some(""));
    }

    #[test]
    fn test_display_address_not_logged_in_uses_fallback() {
        assert_eq!(
            AuthState::logged_out().display_address(Some("0xWAGMI")),
            Some("0xWAGMI")
        );
        assert_eq!(
            AuthState::errored().display_address(Some("0xWAGMI")),
            Some("0xWAGMI")
        );
        assert_eq!(AuthState::errored().display_address(None), None);
    }

    #[test]
    fn test_serialize_omits_absent_address() {
        let json = serde_json::to_string(&AuthState::errored()).unwrap();
        assert_eq!(json, r#"{"status":"errored"}"#);

        let json = serde_json::to_string(&AuthState::logged_in("0x1")).unwrap();
        assert_eq!(json, r#"{"status":"logged_in","address":"0x1"}"#);
    }

    #[test]
    fn test_display_formats_status_and_address() {
        assert_eq!(AuthState::logged_out().to_string(), "LoggedOut");
        assert_eq!(AuthState::logged_in("0x1").to_string(), r#"LoggedIn("0x1")"#);
    }
}
