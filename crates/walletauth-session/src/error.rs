//! Error types for the session layer.

/// Errors that can occur when driving a [`SessionController`](crate::SessionController).
///
/// Events themselves never fail; a malformed payload still produces a
/// state. The only thing that can go wrong is calling the controller at
/// the wrong point in its own lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// An event arrived before [`activate`](crate::SessionController::activate)
    /// was called. The state was left untouched.
    #[error("session controller is not initialized")]
    NotInitialized,

    /// `activate` was called a second time.
    #[error("session controller is already active")]
    AlreadyActive,
}
