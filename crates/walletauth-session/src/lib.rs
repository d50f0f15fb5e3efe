//! Authentication session reconciliation for walletauth.
//!
//! The SDK can authenticate a user several ways (wallet extension, saved
//! wallet credentials, passkeys, SDK-native key pairs) and reports each
//! outcome through its own callback. This crate folds all of them into one
//! normalized view:
//!
//! 1. **Address resolution** — which payload field is "the address"
//!    ([`resolve_address`])
//! 2. **Reduction** — `(AuthState, AuthEvent) -> AuthState` ([`reduce`])
//! 3. **Ownership** — one [`SessionController`] owns the live state and
//!    refuses events until the host has initialized it
//!
//! # How it fits in the stack
//!
//! ```text
//! Presentation (above)  ← reads AuthState snapshots, never mutates them
//!     ↕
//! Session Layer (this crate)  ← owns AuthState
//!     ↕
//! Protocol Layer (below)  ← provides AuthEvent, AuthMethod, AuthPayload
//! ```

mod controller;
mod error;
mod reducer;
mod resolver;
mod state;

pub use controller::SessionController;
pub use error::SessionError;
pub use reducer::reduce;
pub use resolver::resolve_address;
pub use state::{AuthState, AuthStatus};
