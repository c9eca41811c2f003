use std::default::Default;

/// Contains Config properties which will be used by a Client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Largest number of ancestor keys accepted in a record's field path.
    /// A longer path is treated as a malformed buffer.
    pub max_path_length: u16,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_path_length: 64,
        }
    }
}
