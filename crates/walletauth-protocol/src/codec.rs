//! Codec trait and implementations for SDK callback payloads.
//!
//! A codec turns a [`RawCallback`] into an [`AuthEvent`], and turns any
//! serializable value (typically a session snapshot) into bytes. The rest of
//! walletauth only talks to the [`Codec`] trait, so an SDK that speaks
//! something other than JSON needs nothing more than another implementation.

use serde::Serialize;
use serde_json::Value;
use walletauth_sdk::{CallbackKind, RawCallback};

use crate::{AuthEvent, AuthPayload, ProtocolError};

/// Decodes SDK callbacks and encodes outgoing values.
///
/// `Send + Sync + 'static` so one codec can live inside a long-running
/// async task.
pub trait Codec: Send + Sync + 'static {
    /// Decodes one callback into a typed event.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the payload is not in this
    /// codec's format at all. Well-formed payloads with missing fields are
    /// not errors.
    fn decode_event(&self, raw: &RawCallback) -> Result<AuthEvent, ProtocolError>;

    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] for SDKs that hand their callbacks plain JSON objects.
///
/// - Success payloads: `{ "authMethod": ..., "username": ..., "userPub": ... }`
///   (camelCase, every key optional, extra keys ignored).
/// - Error payloads: `{ "message": "..." }`, a bare JSON string, or any
///   other JSON value (its compact text becomes the message).
/// - Logout: the payload is ignored.
///
/// ```rust
/// use walletauth_protocol::{AuthEvent, Codec, JsonCodec};
/// use walletauth_sdk::{CallbackKind, RawCallback};
///
/// let raw = RawCallback::new(
///     CallbackKind::LoginSuccess,
///     r#"{"authMethod":"metamask_direct","username":"0xABC","userPub":"pub1"}"#,
/// );
///
/// let event = JsonCodec.decode_event(&raw).unwrap();
/// assert_eq!(event, AuthEvent::login("metamask_direct", "0xABC", "pub1"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn decode_event(&self, raw: &RawCallback) -> Result<AuthEvent, ProtocolError> {
        match raw.kind {
            CallbackKind::LoginSuccess => {
                Ok(AuthEvent::LoginSuccess(decode_payload(&raw.data)?))
            }
            CallbackKind::SignupSuccess => {
                Ok(AuthEvent::SignupSuccess(decode_payload(&raw.data)?))
            }
            CallbackKind::Error => Ok(AuthEvent::Error {
                message: decode_message(&raw.data)?,
            }),
            CallbackKind::Logout => Ok(AuthEvent::Logout),
        }
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }
}

/// Success payloads that are valid JSON but not an object (an array, a
/// number) carry no usable fields and decode to an empty payload.
fn decode_payload(data: &[u8]) -> Result<AuthPayload, ProtocolError> {
    let value: Value = serde_json::from_slice(data).map_err(ProtocolError::Decode)?;
    if !value.is_object() {
        return Ok(AuthPayload::default());
    }
    // Every field is lenient, so an object can't fail here.
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn decode_message(data: &[u8]) -> Result<String, ProtocolError> {
    let value: Value = serde_json::from_slice(data).map_err(ProtocolError::Decode)?;
    Ok(match value {
        Value::String(message) => message,
        Value::Object(fields) => {
            if let Some(Value::String(message)) = fields.get("message") {
                return Ok(message.clone());
            }
            Value::Object(fields).to_string()
        }
        other => other.to_string(),
    })
}
