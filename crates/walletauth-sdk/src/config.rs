//! Configuration handed to the identity SDK.
//!
//! walletauth does not interpret relay peers at all, and reads the method
//! toggles only for diagnostics. The type lives here so the host has one
//! place to load it from.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::SdkError;

// ---------------------------------------------------------------------------
// MethodToggle
// ---------------------------------------------------------------------------

/// An `{ "enabled": bool }` switch for one authentication method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodToggle {
    pub enabled: bool,
}

impl Default for MethodToggle {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// ---------------------------------------------------------------------------
// SdkConfig
// ---------------------------------------------------------------------------

/// SDK configuration.
///
/// Every key is optional in JSON; missing keys take the [`Default`] values
/// (no peers, every method enabled).
///
/// ```rust
/// use walletauth_sdk::SdkConfig;
///
/// let config = SdkConfig::from_json(
///     r#"{ "peers": ["https://relay.example/gun"], "webauthn": { "enabled": false } }"#,
/// ).unwrap();
///
/// assert_eq!(config.peers.len(), 1);
/// assert!(config.metamask.enabled);
/// assert!(!config.webauthn.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Relay endpoints the SDK connects to.
    pub peers: Vec<String>,

    /// Wallet-extension authentication (the `metamask_*` method tags).
    pub metamask: MethodToggle,

    /// Passkey / biometric authentication.
    pub webauthn: MethodToggle,
}

impl SdkConfig {
    /// Parses a config from a JSON string.
    ///
    /// # Errors
    /// Returns [`SdkError::Config`] if the JSON is malformed or a key has
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        serde_json::from_str(json).map_err(SdkError::Config)
    }

    /// Reads and parses a JSON config file.
    ///
    /// # Errors
    /// Returns [`SdkError::Io`] if the file can't be read, or
    /// [`SdkError::Config`] if its contents don't parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SdkError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(SdkError::Io)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            peers = config.peers.len(),
            "loaded sdk config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_every_method() {
        let config = SdkConfig::default();
        assert!(config.peers.is_empty());
        assert!(config.metamask.enabled);
        assert!(config.webauthn.enabled);
    }

    #[test]
    fn test_from_json_empty_object_uses_defaults() {
        let config = SdkConfig::from_json("{}").unwrap();
        assert_eq!(config, SdkConfig::default());
    }

    #[test]
    fn test_from_json_full_document() {
        let config = SdkConfig::from_json(
            r#"{
                "peers": ["https://a.example/gun", "https://b.example/gun"],
                "metamask": { "enabled": false },
                "webauthn": { "enabled": true }
            }"#,
        )
        .unwrap();

        assert_eq!(config.peers.len(), 2);
        assert!(!config.metamask.enabled);
        assert!(config.webauthn.enabled);
    }

    #[test]
    fn test_from_json_toggle_without_enabled_defaults_true() {
        let config = SdkConfig::from_json(r#"{ "metamask": {} }"#).unwrap();
        assert!(config.metamask.enabled);
    }

    #[test]
    fn test_from_json_wrong_type_returns_config_error() {
        let result = SdkConfig::from_json(r#"{ "peers": "not-a-list" }"#);
        assert!(matches!(result, Err(SdkError::Config(_))));
    }

    #[test]
    fn test_load_missing_file_returns_io_error() {
        let result = SdkConfig::load("/definitely/not/here/walletauth.json");
        assert!(matches!(result, Err(SdkError::Io(_))));
    }

    #[test]
    fn test_load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "walletauth-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "peers": ["https://relay.example/gun"] }"#)
            .unwrap();

        let config = SdkConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.peers, vec!["https://relay.example/gun".to_string()]);
    }

    #[test]
    fn test_load_invalid_json_returns_config_error() {
        let path = std::env::temp_dir().join(format!(
            "walletauth-config-invalid-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ peers: nope").unwrap();

        let result = SdkConfig::load(&path);
        let _ = std::fs::remove_file(&path);

        let err = result.expect_err("invalid json should not load");
        assert!(std::error::Error::source(&err).is_some(), "keeps the json error");
        match err {
            SdkError::Config(source) => assert!(source.is_syntax()),
            other => panic!("expected a config error, got {other:?}"),
        }
    }
}
