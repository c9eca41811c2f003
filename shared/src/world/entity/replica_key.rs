use std::fmt;

use crate::{ComponentKind, NetworkId};

/// What a replicated component is attached to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReplicaOwner {
    Entity(NetworkId),
    /// Scene-level component with no Entity
    Singleton,
}

impl ReplicaOwner {
    /// The identifier written on the wire for this owner
    pub fn network_id(&self) -> NetworkId {
        match self {
            ReplicaOwner::Entity(network_id) => *network_id,
            ReplicaOwner::Singleton => NetworkId::INVALID,
        }
    }

    pub fn from_network_id(network_id: NetworkId) -> Self {
        if network_id.is_valid() {
            ReplicaOwner::Entity(network_id)
        } else {
            ReplicaOwner::Singleton
        }
    }
}

/// Non-owning handle to one observed component instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplicaKey {
    pub owner: ReplicaOwner,
    pub kind: ComponentKind,
}

impl ReplicaKey {
    pub fn entity(network_id: NetworkId, kind: ComponentKind) -> Self {
        Self {
            owner: ReplicaOwner::from_network_id(network_id),
            kind,
        }
    }

    pub fn singleton(kind: ComponentKind) -> Self {
        Self {
            owner: ReplicaOwner::Singleton,
            kind,
        }
    }

    pub fn network_id(&self) -> NetworkId {
        self.owner.network_id()
    }

    pub fn is_singleton(&self) -> bool {
        self.owner == ReplicaOwner::Singleton
    }
}

impl fmt::Display for ReplicaOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.network_id(), f)
    }
}
