use thiserror::Error;

use tickdiff_shared::RegisterError;

/// Errors returned by the Server's public API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerError {
    /// A user with this key is already connected
    #[error("User {user_key} is already connected")]
    UserAlreadyConnected { user_key: String },

    /// No connected user has this key
    #[error("User {user_key} is not connected")]
    UserNotFound { user_key: String },

    /// A component could not be registered for change detection
    #[error(transparent)]
    Register(#[from] RegisterError),
}
