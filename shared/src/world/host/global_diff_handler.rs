use std::collections::{HashMap, HashSet};

use log::{debug, info};

use crate::{
    world::host::{
        direct_watcher::DirectWatcher,
        error::RegisterError,
        indirect_watcher::IndirectWatcher,
        watch_point::{ChangedField, WatchPoint},
        watch_strategy::{StagedPoint, WatchStrategy},
    },
    ComponentKind, ComponentKinds, NetworkId, Ownership, Privacy, ReplicaKey, ReplicaOwner,
    Value, WorldRefType,
};

/// What happened to a registration request that did not fail
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The component is now watched through this many fields
    Watching(usize),
    /// A singleton stricter than PUBLIC, left untracked by configuration
    SkippedRestrictedSingleton,
}

/// A change found by the last detection pass, ready to be filtered per user
#[derive(Clone, Debug)]
pub struct PendingChange<'h> {
    pub point: &'h WatchPoint,
    pub value: Value,
    /// Owner of the point's Entity, looked up once per tick
    pub ownership: Option<Ownership>,
}

struct StrategySlot {
    strategy: WatchStrategy,
    changed: Vec<ChangedField>,
}

/// Owns every watch point on the sending side and finds which ones changed
pub struct GlobalDiffHandler {
    slots: [StrategySlot; 2],
    registered: HashSet<ReplicaKey>,
    entity_components: HashMap<NetworkId, HashSet<ComponentKind>>,
}

impl Default for GlobalDiffHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalDiffHandler {
    pub fn new() -> Self {
        Self {
            slots: [
                StrategySlot {
                    strategy: WatchStrategy::Direct(DirectWatcher::new()),
                    changed: Vec::new(),
                },
                StrategySlot {
                    strategy: WatchStrategy::Indirect(IndirectWatcher::new()),
                    changed: Vec::new(),
                },
            ],
            registered: HashSet::new(),
            entity_components: HashMap::new(),
        }
    }

    /// Starts watching every replicated field of one component instance.
    ///
    /// Either all of the component's fields are watched or, on error, none are.
    pub fn register_component<W: WorldRefType>(
        &mut self,
        world: &W,
        component_kinds: &ComponentKinds,
        key: &ReplicaKey,
        skip_restricted_singletons: bool,
    ) -> Result<RegisterOutcome, RegisterError> {
        let name = component_kinds.kind_to_name(&key.kind);

        if self.registered.contains(key) {
            return Err(RegisterError::AlreadyRegistered {
                owner: key.owner.to_string(),
                component: name,
            });
        }

        let schema = component_kinds
            .schema(&key.kind)
            .map_err(|_| RegisterError::ComponentNotInProtocol)?;
        let component = component_kinds
            .kind_to_net_id(&key.kind)
            .map_err(|_| RegisterError::ComponentNotInProtocol)?;
        let fields = component_kinds
            .watchable_fields(&key.kind)
            .map_err(|_| RegisterError::ComponentNotInProtocol)?;

        if key.is_singleton() && skip_restricted_singletons && schema.privacy() > Privacy::Public {
            info!(
                "GlobalDiffHandler: Skipping {:?} singleton Component {}",
                schema.privacy(),
                name
            );
            return Ok(RegisterOutcome::SkippedRestrictedSingleton);
        }

        let Some(replica) = world.replica(key) else {
            return Err(RegisterError::ReplicaNotFound {
                owner: key.owner.to_string(),
                component: name,
            });
        };

        // capture everything before touching the strategies
        let mut staged = Vec::with_capacity(fields.len());
        for field in fields {
            let point = WatchPoint {
                owner: *key,
                component,
                path: field.path.clone(),
                key: field.key.clone(),
                leaf: field.leaf,
                kind: field.kind,
                privacy: field.privacy,
            };
            staged.push(StagedPoint::capture(field.reach, point, replica, &name)?);
        }

        let count = staged.len();
        for point in staged {
            let mut pending = Some(point);
            for slot in self.slots.iter_mut() {
                if let Some(point) = pending.take() {
                    if let Err(point) = slot.strategy.add(point) {
                        pending = Some(point);
                    }
                }
            }
        }

        self.registered.insert(*key);
        if let ReplicaOwner::Entity(network_id) = key.owner {
            self.entity_components
                .entry(network_id)
                .or_default()
                .insert(key.kind);
        }

        info!(
            "GlobalDiffHandler: Registering Component {} for {} with {} fields",
            name, key.owner, count
        );

        Ok(RegisterOutcome::Watching(count))
    }

    /// Stops watching a component instance. Returns the number of points removed;
    /// calling it for an unknown key does nothing.
    pub fn deregister_component(&mut self, key: &ReplicaKey) -> usize {
        if !self.registered.remove(key) {
            return 0;
        }

        if let ReplicaOwner::Entity(network_id) = key.owner {
            if let Some(kinds) = self.entity_components.get_mut(&network_id) {
                kinds.remove(&key.kind);
                if kinds.is_empty() {
                    self.entity_components.remove(&network_id);
                }
            }
        }

        let mut removed = 0;
        for slot in self.slots.iter_mut() {
            removed += slot.strategy.remove(key);
            slot.changed.retain(|changed| changed.owner != *key);
        }

        info!(
            "GlobalDiffHandler: Deregistered Component on {}, {} fields removed",
            key.owner, removed
        );
        removed
    }

    /// Stops watching every component registered for an Entity
    pub fn deregister_entity(&mut self, network_id: &NetworkId) -> usize {
        let Some(kinds) = self.entity_components.remove(network_id) else {
            return 0;
        };

        kinds
            .into_iter()
            .map(|kind| self.deregister_component(&ReplicaKey::entity(*network_id, kind)))
            .sum()
    }

    pub fn is_registered(&self, key: &ReplicaKey) -> bool {
        self.registered.contains(key)
    }

    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    pub fn watch_point_count(&self) -> usize {
        self.slots.iter().map(|slot| slot.strategy.len()).sum()
    }

    /// Compares every watched field against its last known state. The changed
    /// set replaces the one from the previous pass.
    pub fn detect_changes<W: WorldRefType>(&mut self, world: &W) -> usize {
        let mut total = 0;
        for slot in self.slots.iter_mut() {
            slot.changed.clear();
            slot.strategy.detect_changes(world, &mut slot.changed);
            debug!(
                "GlobalDiffHandler: {:?} strategy found {} of {} fields changed",
                slot.strategy.reach(),
                slot.changed.len(),
                slot.strategy.len()
            );
            total += slot.changed.len();
        }
        total
    }

    /// The fields found changed by the last detection pass, with their new values
    pub fn pending_changes<W: WorldRefType>(&self, world: &W) -> Vec<PendingChange<'_>> {
        let mut output = Vec::new();
        for slot in self.slots.iter() {
            for changed in &slot.changed {
                let Some((point, value)) = slot.strategy.current(changed) else {
                    continue;
                };
                let ownership = match point.owner.owner {
                    ReplicaOwner::Entity(network_id) => world.ownership(&network_id),
                    ReplicaOwner::Singleton => None,
                };
                output.push(PendingChange {
                    point,
                    value,
                    ownership,
                });
            }
        }
        output
    }
}
