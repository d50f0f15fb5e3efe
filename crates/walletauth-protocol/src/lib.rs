//! Authentication events for walletauth.
//!
//! This crate turns what the SDK hands us (a callback kind plus a JSON
//! blob) into typed values the session layer can reason about:
//!
//! - **Types** ([`AuthMethod`], [`AuthPayload`], [`AuthEvent`]) — the
//!   normalized event vocabulary.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how raw callbacks become
//!   [`AuthEvent`]s, and how snapshots become bytes for a host that wants
//!   them.
//! - **Errors** ([`ProtocolError`]) — what can go wrong while doing so.
//!
//! ```text
//! SDK (RawCallback bytes) → Protocol (AuthEvent) → Session (AuthState)
//! ```

mod codec;
mod error;
mod types;

pub use codec::{Codec, JsonCodec};
pub use error::ProtocolError;
pub use types::{AuthEvent, AuthMethod, AuthPayload};
