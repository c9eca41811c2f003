use crate::{ComponentKind, NetworkId, Ownership, ReplicaKey, Replicate};

/// Structures that implement the WorldRefType trait will be able to be read
/// from by the diff engine, on the sending side
pub trait WorldRefType {
    /// gets the live component instance addressed by a key, if it still exists
    fn replica(&self, key: &ReplicaKey) -> Option<&dyn Replicate>;
    /// lists the component kinds attached to an Entity
    fn component_kinds(&self, network_id: &NetworkId) -> Vec<ComponentKind>;
    /// gets the owner of an Entity, if it has one
    fn ownership(&self, network_id: &NetworkId) -> Option<Ownership>;
}

/// Structures that implement the WorldMutType trait will be able to be
/// written to by the diff engine, on the receiving side
pub trait WorldMutType: WorldRefType {
    /// gets mutable access to a component instance addressed by a key
    fn replica_mut(&mut self, key: &ReplicaKey) -> Option<&mut dyn Replicate>;
}
