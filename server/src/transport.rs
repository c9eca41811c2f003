use std::fmt;

use tickdiff_shared::UserKey;

/// Returned by a Transport that could not accept a buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SendError;

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport could not send buffer")
    }
}

impl std::error::Error for SendError {}

/// Delivers one user's buffer of changes for one tick
pub trait Transport {
    fn send(&mut self, user_key: &UserKey, payload: Vec<u8>) -> Result<(), SendError>;
}
