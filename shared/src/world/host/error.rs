use thiserror::Error;

/// Errors that can occur while registering a component for change detection
///
/// A failed registration leaves no watch points behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// Component kind was never added to the Protocol
    #[error("Component kind is not part of the Protocol. Must call `add_component()` during protocol initialization")]
    ComponentNotInProtocol,

    /// The key is already being watched
    #[error("Component {component} on {owner} is already registered")]
    AlreadyRegistered { owner: String, component: String },

    /// The world has no instance for the key
    #[error("Component {component} on {owner} not found in world")]
    ReplicaNotFound { owner: String, component: String },

    /// A declared field cannot be observed on the live instance
    #[error("Field '{path}' of component {component} cannot be watched: {reason}")]
    UnwatchableField {
        component: String,
        path: String,
        reason: String,
    },
}
