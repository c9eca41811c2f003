/// Simple World implementation for end-to-end testing

use std::collections::HashMap;

use tickdiff_shared::{
    ComponentKind, NetworkId, Ownership, ReplicaKey, ReplicaOwner, Replicate, ReplicateSchema,
    WorldMutType, WorldRefType,
};

// TestWorld - HashMap-based world holding boxed components
#[derive(Default)]
pub struct TestWorld {
    replicas: HashMap<ReplicaKey, Box<dyn Replicate>>,
    owners: HashMap<NetworkId, Ownership>,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<C: ReplicateSchema>(&mut self, network_id: NetworkId, component: C) {
        let key = ReplicaKey::entity(network_id, ComponentKind::of::<C>());
        self.replicas.insert(key, Box::new(component));
    }

    pub fn insert_singleton<C: ReplicateSchema>(&mut self, component: C) {
        let key = ReplicaKey::singleton(ComponentKind::of::<C>());
        self.replicas.insert(key, Box::new(component));
    }

    pub fn remove<C: ReplicateSchema>(&mut self, network_id: NetworkId) -> bool {
        let key = ReplicaKey::entity(network_id, ComponentKind::of::<C>());
        self.replicas.remove(&key).is_some()
    }

    pub fn set_owner(&mut self, network_id: NetworkId, ownership: Ownership) {
        self.owners.insert(network_id, ownership);
    }

    pub fn get<C: ReplicateSchema>(&self, network_id: NetworkId) -> Option<&C> {
        let key = ReplicaKey::entity(network_id, ComponentKind::of::<C>());
        self.replicas
            .get(&key)
            .and_then(|replica| replica.to_any().downcast_ref::<C>())
    }

    pub fn get_mut<C: ReplicateSchema>(&mut self, network_id: NetworkId) -> Option<&mut C> {
        let key = ReplicaKey::entity(network_id, ComponentKind::of::<C>());
        self.replicas
            .get_mut(&key)
            .and_then(|replica| replica.to_any_mut().downcast_mut::<C>())
    }

    pub fn singleton<C: ReplicateSchema>(&self) -> Option<&C> {
        self.get(NetworkId::INVALID)
    }

    pub fn singleton_mut<C: ReplicateSchema>(&mut self) -> Option<&mut C> {
        self.get_mut(NetworkId::INVALID)
    }
}

impl WorldRefType for TestWorld {
    fn replica(&self, key: &ReplicaKey) -> Option<&dyn Replicate> {
        self.replicas.get(key).map(|replica| replica.as_ref())
    }

    fn component_kinds(&self, network_id: &NetworkId) -> Vec<ComponentKind> {
        let owner = ReplicaOwner::Entity(*network_id);
        self.replicas
            .keys()
            .filter(|key| key.owner == owner)
            .map(|key| key.kind)
            .collect()
    }

    fn ownership(&self, network_id: &NetworkId) -> Option<Ownership> {
        self.owners.get(network_id).copied()
    }
}

impl WorldMutType for TestWorld {
    fn replica_mut(&mut self, key: &ReplicaKey) -> Option<&mut dyn Replicate> {
        match self.replicas.get_mut(key) {
            Some(replica) => Some(replica.as_mut()),
            None => None,
        }
    }
}
