use std::default::Default;

/// Contains Config properties which will be used by the Server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Leaves singleton components stricter than PUBLIC untracked. Singletons
    /// have no owner, so such fields could never be sent to anyone.
    pub skip_restricted_singletons: bool,
    /// Hands a buffer to the transport even when a user has nothing to receive
    pub send_empty_buffers: bool,
    /// Starting capacity, in bytes, of each user's outgoing buffer
    pub initial_buffer_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            skip_restricted_singletons: true,
            send_empty_buffers: false,
            initial_buffer_capacity: 1024,
        }
    }
}
