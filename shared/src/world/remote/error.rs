use thiserror::Error;

use crate::{DecodeError, FieldError, ValueKind};

/// Reasons a single diff record was consumed but not applied
///
/// None of these affect the records that follow in the same buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The target or component slot held a value that is not an identifier
    #[error("Record {slot} must be an identifier, got a {kind} value")]
    NotAnIdentifier { slot: &'static str, kind: ValueKind },

    /// A path slot held a value that is not a field key
    #[error("Record field key must be a Name or U32, got a {kind} value")]
    NotAFieldKey { kind: ValueKind },

    /// No component net ID matches the record
    #[error("Record addresses unknown component net ID {net_id}")]
    UnknownComponent { net_id: u16 },

    /// The local world has no such component instance
    #[error("Record target {target} has no component {component} in the local world")]
    UnresolvedTarget { target: String, component: String },

    /// The record's field path does not lead to a replicated value field
    #[error("Component {component} cannot address '{path}': {source}")]
    Field {
        component: String,
        path: String,
        #[source]
        source: FieldError,
    },

    /// The component refused the new value
    #[error("Component {component} rejected value for '{path}': {source}")]
    ValueRejected {
        component: String,
        path: String,
        #[source]
        source: FieldError,
    },
}

/// Errors that abort the reading of a whole buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiveError {
    /// Record framing could not be decoded. Records before the failure stay
    /// applied, and the ones skipped before it are kept in `skipped`.
    #[error("Malformed diff buffer after {applied} applied records: {source}")]
    Malformed {
        applied: usize,
        skipped: Vec<RecordError>,
        #[source]
        source: DecodeError,
    },
}
