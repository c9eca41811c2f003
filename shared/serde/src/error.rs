use thiserror::Error;

/// Errors raised while reading from a bit stream
///
/// Every variant means the stream position can no longer be trusted. Callers
/// reading positionally framed data must stop reading the enclosing buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// The buffer ended before the value was complete
    #[error("Unexpected end of buffer: needed {bits_needed} more bits, {bits_remaining} remaining")]
    UnexpectedEnd { bits_needed: u32, bits_remaining: u32 },

    /// A variable-width integer kept signalling continuation past 128 bits
    #[error("Variable-width integer exceeded 128 bits")]
    IntegerOverflow,

    /// An integer was read that does not fit the requested type
    #[error("Integer value {value} is out of range for {type_name}")]
    IntegerOutOfRange { value: i128, type_name: &'static str },

    /// A string payload was not valid UTF-8
    #[error("String payload of {byte_length} bytes is not valid UTF-8")]
    InvalidUtf8 { byte_length: usize },
}
