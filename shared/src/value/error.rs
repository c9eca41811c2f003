use thiserror::Error;

use tickdiff_serde::SerdeErr;

use crate::ValueKind;

/// Errors raised while building a TypeRegistry from a table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeRegistryError {
    /// Tag 0 never identifies a type
    #[error("Type tag 0 is reserved and cannot be assigned to {kind}")]
    ReservedTag { kind: ValueKind },

    /// The same tag was assigned to two kinds
    #[error("Type tag {tag} assigned to both {first} and {second}")]
    DuplicateTag {
        tag: u8,
        first: ValueKind,
        second: ValueKind,
    },

    /// The same kind was listed twice
    #[error("Value kind {kind} listed more than once in type table")]
    DuplicateKind { kind: ValueKind },

    /// A kind has no tag, so values of it could not be written
    #[error("Value kind {kind} has no type tag")]
    MissingKind { kind: ValueKind },
}

/// Errors raised while decoding typed values and record framing
///
/// All of them are fatal for the buffer being read: framing is positional and
/// cannot be resynchronized once lost.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The underlying bit stream failed
    #[error("Malformed bit stream: {0}")]
    Serde(#[from] SerdeErr),

    /// A tag that the registry does not know
    #[error("Unknown type tag {tag}")]
    UnknownTypeTag { tag: u8 },

    /// A record declared more path keys than the receiver accepts
    #[error("Field path of {len} keys exceeds the maximum of {max}")]
    PathTooLong { len: u16, max: u16 },
}
