use log::warn;

use crate::{
    world::host::{
        error::RegisterError,
        owner_points::OwnerPoints,
        watch_point::{ChangedField, WatchPoint},
    },
    ReplicaKey, Replicate, Value, WorldRefType,
};

/// A watch point plus the last value read through the field's accessor
pub struct IndirectWatchPoint {
    point: WatchPoint,
    last: Value,
}

impl IndirectWatchPoint {
    pub fn capture(
        point: WatchPoint,
        replica: &dyn Replicate,
        component_name: &str,
    ) -> Result<Self, RegisterError> {
        let Some(last) = replica.read_field(point.leaf) else {
            return Err(RegisterError::UnwatchableField {
                component: component_name.to_string(),
                path: point.field_name(),
                reason: "component does not read this field".to_string(),
            });
        };

        if last.kind() != point.kind {
            return Err(RegisterError::UnwatchableField {
                component: component_name.to_string(),
                path: point.field_name(),
                reason: format!("declared {}, component reads {}", point.kind, last.kind()),
            });
        }

        Ok(Self { point, last })
    }

    pub fn point(&self) -> &WatchPoint {
        &self.point
    }
}

/// Watches accessor-only fields by comparing values
#[derive(Default)]
pub struct IndirectWatcher {
    points: OwnerPoints<IndirectWatchPoint>,
}

impl IndirectWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, point: IndirectWatchPoint) {
        self.points.push(point.point.owner, point);
    }

    pub fn remove(&mut self, owner: &ReplicaKey) -> usize {
        self.points.remove(owner)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn detect_changes<W: WorldRefType>(&mut self, world: &W, changed: &mut Vec<ChangedField>) {
        for (owner, points) in self.points.iter_mut() {
            let Some(replica) = world.replica(owner) else {
                warn!(
                    "IndirectWatcher: component on {} missing from world, skipping {} fields",
                    owner.owner,
                    points.len()
                );
                continue;
            };

            for (index, watch) in points.iter_mut().enumerate() {
                let Some(value) = replica.read_field(watch.point.leaf) else {
                    warn!(
                        "IndirectWatcher: field '{}' on {} could not be read",
                        watch.point.field_name(),
                        owner.owner
                    );
                    continue;
                };
                if value != watch.last {
                    watch.last = value;
                    changed.push(ChangedField {
                        owner: *owner,
                        index,
                    });
                }
            }
        }
    }

    pub fn current(&self, changed: &ChangedField) -> Option<(&WatchPoint, Value)> {
        let watch = self.points.get(&changed.owner)?.get(changed.index)?;
        Some((&watch.point, watch.last.clone()))
    }
}
