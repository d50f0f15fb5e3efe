//! Typed authentication events.
//!
//! The SDK reports outcomes through three callbacks whose payloads share a
//! loose shape: `{ authMethod, username, userPub, ... }` for the success
//! callbacks and something error-like for the failure callback. Nothing in
//! that shape is guaranteed, so these types are forgiving when
//! deserialized: missing or oddly typed fields come out as `None` instead of
//! failing the whole payload.

use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use walletauth_sdk::{CallbackKind, RawCallback, SdkConfig};

// ---------------------------------------------------------------------------
// AuthMethod
// ---------------------------------------------------------------------------

/// Which authentication path produced an event.
///
/// The SDK sends this as a free-form string. The three wallet-extension
/// tags are recognized; anything else lands in [`AuthMethod::Other`] with
/// the raw tag kept for logging. `Other` means an SDK-native identity
/// (passkey, biometric, key pair) rather than an external wallet.
///
/// Serializes back to the exact tag it was parsed from:
///
/// ```rust
/// use walletauth_protocol::AuthMethod;
///
/// assert_eq!(AuthMethod::from("metamask_saved"), AuthMethod::MetamaskSaved);
/// assert_eq!(AuthMethod::from("webauthn").as_str(), "webauthn");
/// assert!(AuthMethod::MetamaskSignup.is_wallet());
/// assert!(!AuthMethod::from("webauthn").is_wallet());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuthMethod {
    /// Wallet extension, connected directly during this login.
    MetamaskDirect,
    /// Wallet extension, using credentials the SDK saved earlier.
    MetamaskSaved,
    /// Wallet extension, during signup.
    MetamaskSignup,
    /// Any other tag. Carries the tag verbatim (possibly empty).
    Other(String),
}

impl AuthMethod {
    pub const METAMASK_DIRECT: &'static str = "metamask_direct";
    pub const METAMASK_SAVED: &'static str = "metamask_saved";
    pub const METAMASK_SIGNUP: &'static str = "metamask_signup";

    /// Returns `true` for the wallet-derived tags.
    ///
    /// For these methods the SDK carries the wallet account address in the
    /// `username` field.
    pub fn is_wallet(&self) -> bool {
        matches!(
            self,
            Self::MetamaskDirect | Self::MetamaskSaved | Self::MetamaskSignup
        )
    }

    /// The raw tag as the SDK spells it.
    pub fn as_str(&self) -> &str {
        match self {
            Self::MetamaskDirect => Self::METAMASK_DIRECT,
            Self::MetamaskSaved => Self::METAMASK_SAVED,
            Self::MetamaskSignup => Self::METAMASK_SIGNUP,
            Self::Other(tag) => tag,
        }
    }

    /// Returns `true` if `config` leaves this method switched on.
    ///
    /// Only the wallet tags map onto a toggle. SDK-native identities can't
    /// be enumerated from the tag alone, so `Other` is always permitted.
    pub fn permitted_by(&self, config: &SdkConfig) -> bool {
        if self.is_wallet() {
            config.metamask.enabled
        } else {
            true
        }
    }
}

impl Default for AuthMethod {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<&str> for AuthMethod {
    fn from(tag: &str) -> Self {
        match tag {
            Self::METAMASK_DIRECT => Self::MetamaskDirect,
            Self::METAMASK_SAVED => Self::MetamaskSaved,
            Self::METAMASK_SIGNUP => Self::MetamaskSignup,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for AuthMethod {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            Self::METAMASK_DIRECT | Self::METAMASK_SAVED | Self::METAMASK_SIGNUP => {
                Self::from(tag.as_str())
            }
            _ => Self::Other(tag),
        }
    }
}

impl From<AuthMethod> for String {
    fn from(method: AuthMethod) -> Self {
        match method {
            AuthMethod::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuthPayload
// ---------------------------------------------------------------------------

/// The body shared by login-success and signup-success callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    #[serde(default, deserialize_with = "lenient_method")]
    pub auth_method: AuthMethod,

    /// For wallet methods, the wallet account address. Otherwise a
    /// display name, if the SDK provides one.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub username: Option<String>,

    /// The SDK's intrinsic public-key identity.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_pub: Option<String>,
}

impl AuthPayload {
    /// Builds a payload with every field present.
    pub fn new(
        auth_method: impl Into<AuthMethod>,
        username: impl Into<String>,
        user_pub: impl Into<String>,
    ) -> Self {
        Self {
            auth_method: auth_method.into(),
            username: Some(username.into()),
            user_pub: Some(user_pub.into()),
        }
    }
}

/// Accepts a JSON string; anything else (number, object, null) becomes
/// `None` rather than an error.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    #[allow(dead_code)]
    enum Lenient {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Lenient::deserialize(deserializer)? {
        Lenient::Text(text) => Some(text),
        Lenient::Other(_) => None,
    })
}

fn lenient_method<'de, D>(deserializer: D) -> Result<AuthMethod, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?
        .map(AuthMethod::from)
        .unwrap_or_default())
}

// ---------------------------------------------------------------------------
// AuthEvent
// ---------------------------------------------------------------------------

/// One SDK outcome, normalized. This is the session reducer's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    LoginSuccess(AuthPayload),
    SignupSuccess(AuthPayload),

    /// The SDK reported a failure. The cause is not classified further.
    Error { message: String },

    /// The SDK reported an explicit sign-out.
    Logout,
}

impl AuthEvent {
    pub fn login(
        auth_method: impl Into<AuthMethod>,
        username: impl Into<String>,
        user_pub: impl Into<String>,
    ) -> Self {
        Self::LoginSuccess(AuthPayload::new(auth_method, username, user_pub))
    }

    pub fn signup(
        auth_method: impl Into<AuthMethod>,
        username: impl Into<String>,
        user_pub: impl Into<String>,
    ) -> Self {
        Self::SignupSuccess(AuthPayload::new(auth_method, username, user_pub))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// The best event that can be made from a callback whose payload could
    /// not be decoded at all.
    ///
    /// Success callbacks still count as successes, just with an empty
    /// payload. Error callbacks keep the raw text as their message.
    pub fn from_undecodable(raw: &RawCallback) -> Self {
        match raw.kind {
            CallbackKind::LoginSuccess => Self::LoginSuccess(AuthPayload::default()),
            CallbackKind::SignupSuccess => Self::SignupSuccess(AuthPayload::default()),
            CallbackKind::Error => Self::error(String::from_utf8_lossy(&raw.data)),
            CallbackKind::Logout => Self::Logout,
        }
    }

    /// The callback kind this event corresponds to.
    pub fn kind(&self) -> CallbackKind {
        match self {
            Self::LoginSuccess(_) => CallbackKind::LoginSuccess,
            Self::SignupSuccess(_) => CallbackKind::SignupSuccess,
            Self::Error { .. } => CallbackKind::Error,
            Self::Logout => CallbackKind::Logout,
        }
    }
}
