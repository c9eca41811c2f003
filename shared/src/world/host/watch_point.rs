use crate::{
    world::component::{
        component_kinds::NetId,
        field_key::{FieldKey, FieldPath, LeafId},
    },
    Privacy, ReplicaKey, ValueKind,
};

/// One observed field of one live component
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatchPoint {
    pub owner: ReplicaKey,
    /// Net ID of the owner's component kind, resolved at registration
    pub component: NetId,
    pub path: FieldPath,
    pub key: FieldKey,
    pub leaf: LeafId,
    pub kind: ValueKind,
    pub privacy: Privacy,
}

impl WatchPoint {
    pub fn field_name(&self) -> String {
        self.path.display_with(&self.key)
    }
}

/// Location of a point that changed during the last detection pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChangedField {
    pub owner: ReplicaKey,
    pub index: usize,
}
