use thiserror::Error;

use crate::ValueKind;

/// Errors that can occur during component kind registration and lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// Net ID lookup failed (no component was registered under it)
    #[error("Component net ID {net_id} not found in registry. Both peers must add the same components in the same order")]
    NetIdNotFound { net_id: u16 },

    /// Component kind lookup failed (component type not found in registry)
    #[error("Component kind not found in registry. Must properly initialize Component with Protocol via `add_component()` function")]
    KindNotFound,

    /// The same component type was added twice
    #[error("Component {component_name} has already been added to the Protocol")]
    AlreadyRegistered { component_name: String },

    /// Every net ID is in use
    #[error("Cannot register more than {max} component kinds")]
    TooManyComponents { max: u16 },

    /// The component's schema declares a field that cannot be watched
    #[error("Component {component_name} has an invalid schema: {source}")]
    InvalidSchema {
        component_name: String,
        #[source]
        source: SchemaError,
    },
}

/// Errors found while walking a component schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A replicated field has a shape neither watch strategy can compare
    #[error("Field '{path}' is a dynamic container and cannot be replicated. Mark it local or give it a fixed structure")]
    DynamicField { path: String },

    /// A direct field of a kind that has no fixed in-memory size
    #[error("Field '{path}' of kind {kind} has no fixed size and cannot be watched directly. Declare it as an accessor field")]
    VariableSizeDirect { path: String, kind: ValueKind },

    /// Two sibling fields share a key, making paths ambiguous
    #[error("Field key '{path}' is declared more than once")]
    DuplicateKey { path: String },

    /// More value fields than a LeafId can count
    #[error("Schema declares more than {max} value fields")]
    TooManyFields { max: u16 },
}

/// Errors raised when addressing or assigning a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// No field with this key at this point of the path
    #[error("No field at '{path}'")]
    MissingField { path: String },

    /// A path step landed on a field that has no children
    #[error("Field '{path}' is not a structure and cannot be walked into")]
    NotAStruct { path: String },

    /// The path ended on a structure instead of a value
    #[error("Field '{path}' is not a value field")]
    NotAValue { path: String },

    /// The field exists but is excluded from replication
    #[error("Field '{path}' is not replicated")]
    NotReplicated { path: String },

    /// The component does not expose the requested leaf
    #[error("Component has no field with leaf id {leaf}")]
    UnknownLeaf { leaf: u16 },

    /// A value of the wrong type was offered to a field
    #[error("Field with leaf id {leaf} holds {expected}, received a {actual} value")]
    KindMismatch {
        leaf: u16,
        expected: &'static str,
        actual: ValueKind,
    },

    /// The component refused the value
    #[error("Field with leaf id {leaf} rejected value: {reason}")]
    ValueRejected { leaf: u16, reason: String },
}
