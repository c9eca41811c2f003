use crate::{
    world::{
        component::schema::Reachability,
        host::{
            direct_watcher::{DirectWatchPoint, DirectWatcher},
            error::RegisterError,
            indirect_watcher::{IndirectWatchPoint, IndirectWatcher},
            watch_point::{ChangedField, WatchPoint},
        },
    },
    ReplicaKey, Replicate, Value, WorldRefType,
};

/// A captured point waiting to be handed to its strategy
pub enum StagedPoint {
    Direct(DirectWatchPoint),
    Indirect(IndirectWatchPoint),
}

impl StagedPoint {
    /// Snapshots the field through whichever strategy its reachability calls for
    pub fn capture(
        reach: Reachability,
        point: WatchPoint,
        replica: &dyn Replicate,
        component_name: &str,
    ) -> Result<Self, RegisterError> {
        match reach {
            Reachability::Direct => {
                DirectWatchPoint::capture(point, replica, component_name).map(StagedPoint::Direct)
            }
            Reachability::Accessor => {
                IndirectWatchPoint::capture(point, replica, component_name)
                    .map(StagedPoint::Indirect)
            }
        }
    }
}

/// The two ways of noticing that a field changed
pub enum WatchStrategy {
    Direct(DirectWatcher),
    Indirect(IndirectWatcher),
}

impl WatchStrategy {
    pub fn reach(&self) -> Reachability {
        match self {
            WatchStrategy::Direct(_) => Reachability::Direct,
            WatchStrategy::Indirect(_) => Reachability::Accessor,
        }
    }

    /// Takes ownership of a staged point. Returns it back if it belongs to the
    /// other strategy.
    pub fn add(&mut self, staged: StagedPoint) -> Result<(), StagedPoint> {
        match (self, staged) {
            (WatchStrategy::Direct(watcher), StagedPoint::Direct(point)) => {
                watcher.add(point);
                Ok(())
            }
            (WatchStrategy::Indirect(watcher), StagedPoint::Indirect(point)) => {
                watcher.add(point);
                Ok(())
            }
            (_, staged) => Err(staged),
        }
    }

    pub fn remove(&mut self, owner: &ReplicaKey) -> usize {
        match self {
            WatchStrategy::Direct(watcher) => watcher.remove(owner),
            WatchStrategy::Indirect(watcher) => watcher.remove(owner),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            WatchStrategy::Direct(watcher) => watcher.len(),
            WatchStrategy::Indirect(watcher) => watcher.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            WatchStrategy::Direct(watcher) => watcher.is_empty(),
            WatchStrategy::Indirect(watcher) => watcher.is_empty(),
        }
    }

    pub fn detect_changes<W: WorldRefType>(&mut self, world: &W, changed: &mut Vec<ChangedField>) {
        match self {
            WatchStrategy::Direct(watcher) => watcher.detect_changes(world, changed),
            WatchStrategy::Indirect(watcher) => watcher.detect_changes(world, changed),
        }
    }

    pub fn current(&self, changed: &ChangedField) -> Option<(&WatchPoint, Value)> {
        match self {
            WatchStrategy::Direct(watcher) => watcher.current(changed),
            WatchStrategy::Indirect(watcher) => watcher.current(changed),
        }
    }
}
