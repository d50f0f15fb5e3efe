//! Address resolution: which payload field is the user's address.
//!
//! The SDK overloads `username`. For the wallet-extension methods it holds
//! the wallet account address; for everything else it is a display name
//! and the identity lives in `userPub`. This module is the only place that
//! knows that.

use walletauth_protocol::AuthPayload;

/// Picks the canonical address out of a success payload.
///
/// First match wins:
/// 1. wallet-derived method (`metamask_direct`, `metamask_saved`,
///    `metamask_signup`) → `username`
/// 2. anything else → `user_pub`
///
/// A missing field resolves to the empty string. The other field is never
/// used as a substitute.
///
/// ```rust
/// use walletauth_protocol::AuthPayload;
/// use walletauth_session::resolve_address;
///
/// let wallet = AuthPayload::new("metamask_direct", "0xABC", "pub1");
/// assert_eq!(resolve_address(&wallet), "0xABC");
///
/// let passkey = AuthPayload::new("webauthn", "u1", "pub1");
/// assert_eq!(resolve_address(&passkey), "pub1");
/// ```
pub fn resolve_address(payload: &AuthPayload) -> String {
    let field = if payload.auth_method.is_wallet() {
        &payload.username
    } else {
        &payload.user_pub
    };
    field.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use walletauth_protocol::AuthMethod;

    const WALLET_TAGS: [&str; 3] = ["metamask_direct", "metamask_saved", "metamask_signup"];

    #[test]
    fn test_resolve_wallet_methods_use_username() {
        for tag in WALLET_TAGS {
            let payload = AuthPayload::new(tag, "0xABC", "pub1");
            assert_eq!(resolve_address(&payload), "0xABC", "method {tag}");
        }
    }

    #[test]
    fn test_resolve_other_methods_use_user_pub() {
        for tag in ["webauthn", "password", "", "METAMASK_DIRECT"] {
            let payload = AuthPayload::new(tag, "u1", "pub1");
            assert_eq!(resolve_address(&payload), "pub1", "method {tag:?}");
        }
    }

    #[test]
    fn test_resolve_wallet_missing_username_is_empty() {
        let payload = AuthPayload {
            auth_method: AuthMethod::MetamaskSaved,
            username: None,
            user_pub: Some("pub1".into()),
        };
        // Never falls back to user_pub.
        assert_eq!(resolve_address(&payload), "");
    }

    #[test]
    fn test_resolve_other_missing_user_pub_is_empty() {
        let payload = AuthPayload {
            auth_method: AuthMethod::from("webauthn"),
            username: Some("u1".into()),
            user_pub: None,
        };
        assert_eq!(resolve_address(&payload), "");
    }

    #[test]
    fn test_resolve_empty_payload_is_empty() {
        assert_eq!(resolve_address(&AuthPayload::default()), "");
    }
}
