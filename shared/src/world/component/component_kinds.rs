use std::{any::TypeId, collections::HashMap};

use log::info;

use crate::world::component::{
    error::ComponentError,
    replicate::ReplicateSchema,
    schema::{ReplicaSchema, WatchableField},
};

/// Wire identifier of a component kind
pub type NetId = u16;

/// ComponentKind - should be one unique value for each type of Component
#[derive(Eq, Hash, Copy, Clone, PartialEq, Debug)]
pub struct ComponentKind {
    type_id: TypeId,
}

impl From<TypeId> for ComponentKind {
    fn from(type_id: TypeId) -> Self {
        Self { type_id }
    }
}

impl ComponentKind {
    pub fn of<C: ReplicateSchema>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
        }
    }
}

struct ComponentEntry {
    net_id: NetId,
    name: String,
    schema: ReplicaSchema,
    watchable: Vec<WatchableField>,
}

/// ComponentKinds - the registry of every replicable component type, mapping
/// each to a NetId by registration order
pub struct ComponentKinds {
    current_net_id: NetId,
    kind_map: HashMap<ComponentKind, ComponentEntry>,
    net_id_map: HashMap<NetId, ComponentKind>,
}

impl Default for ComponentKinds {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentKinds {
    pub fn new() -> Self {
        Self {
            current_net_id: 0,
            kind_map: HashMap::new(),
            net_id_map: HashMap::new(),
        }
    }

    /// Registers a component type, walking its schema once up front.
    /// Components whose schema has a field that cannot be watched are refused.
    pub fn add_component<C: ReplicateSchema>(&mut self) -> Result<ComponentKind, ComponentError> {
        let component_kind = ComponentKind::of::<C>();
        let name = C::kind_name().to_string();

        if self.kind_map.contains_key(&component_kind) {
            return Err(ComponentError::AlreadyRegistered {
                component_name: name,
            });
        }
        if self.current_net_id == NetId::MAX {
            return Err(ComponentError::TooManyComponents { max: NetId::MAX });
        }

        let schema = C::schema();
        let watchable = schema
            .watchable_fields()
            .map_err(|source| ComponentError::InvalidSchema {
                component_name: name.clone(),
                source,
            })?;

        let net_id = self.current_net_id;
        info!(
            "ComponentKinds: Registering Component {} as NetId {} with {} replicated fields",
            name,
            net_id,
            watchable.len()
        );
        self.kind_map.insert(
            component_kind,
            ComponentEntry {
                net_id,
                name,
                schema,
                watchable,
            },
        );
        self.net_id_map.insert(net_id, component_kind);
        self.current_net_id += 1;

        Ok(component_kind)
    }

    pub fn len(&self) -> usize {
        self.kind_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kind_map.is_empty()
    }

    pub fn contains(&self, component_kind: &ComponentKind) -> bool {
        self.kind_map.contains_key(component_kind)
    }

    pub fn kind_to_net_id(&self, component_kind: &ComponentKind) -> Result<NetId, ComponentError> {
        self.kind_map
            .get(component_kind)
            .map(|entry| entry.net_id)
            .ok_or(ComponentError::KindNotFound)
    }

    pub fn net_id_to_kind(&self, net_id: &NetId) -> Result<ComponentKind, ComponentError> {
        self.net_id_map
            .get(net_id)
            .copied()
            .ok_or(ComponentError::NetIdNotFound { net_id: *net_id })
    }

    pub fn kind_to_name(&self, component_kind: &ComponentKind) -> String {
        match self.kind_map.get(component_kind) {
            Some(entry) => entry.name.clone(),
            None => "Unknown".to_string(),
        }
    }

    pub fn schema(&self, component_kind: &ComponentKind) -> Result<&ReplicaSchema, ComponentError> {
        self.kind_map
            .get(component_kind)
            .map(|entry| &entry.schema)
            .ok_or(ComponentError::KindNotFound)
    }

    /// Replicated value fields of a kind, computed when it was registered
    pub fn watchable_fields(
        &self,
        component_kind: &ComponentKind,
    ) -> Result<&[WatchableField], ComponentError> {
        self.kind_map
            .get(component_kind)
            .map(|entry| entry.watchable.as_slice())
            .ok_or(ComponentError::KindNotFound)
    }
}
