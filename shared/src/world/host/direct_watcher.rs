use log::warn;

use crate::{
    world::host::{
        error::RegisterError,
        owner_points::OwnerPoints,
        watch_point::{ChangedField, WatchPoint},
    },
    ReplicaKey, Replicate, Value, WorldRefType,
};

/// A watch point plus the bytes the field held at the last detection pass
pub struct DirectWatchPoint {
    point: WatchPoint,
    shadow: Box<[u8]>,
}

impl DirectWatchPoint {
    /// Captures the field's current bytes. Fails if the component does not
    /// expose the field or exposes a slice of the wrong length.
    pub fn capture(
        point: WatchPoint,
        replica: &dyn Replicate,
        component_name: &str,
    ) -> Result<Self, RegisterError> {
        let Some(bytes) = replica.raw_field(point.leaf) else {
            return Err(RegisterError::UnwatchableField {
                component: component_name.to_string(),
                path: point.field_name(),
                reason: "component exposes no byte view for a direct field".to_string(),
            });
        };

        let expected = point.kind.fixed_size().unwrap_or(0);
        if bytes.len() != expected {
            return Err(RegisterError::UnwatchableField {
                component: component_name.to_string(),
                path: point.field_name(),
                reason: format!(
                    "byte view is {} bytes, {} needs {}",
                    bytes.len(),
                    point.kind,
                    expected
                ),
            });
        }

        Ok(Self {
            shadow: bytes.into(),
            point,
        })
    }

    pub fn point(&self) -> &WatchPoint {
        &self.point
    }
}

/// Watches fields with a stable byte view by comparing them against a shadow copy
#[derive(Default)]
pub struct DirectWatcher {
    points: OwnerPoints<DirectWatchPoint>,
}

impl DirectWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, point: DirectWatchPoint) {
        self.points.push(point.point.owner, point);
    }

    /// Drops every point of an owner, returning how many there were
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
                    "DirectWatcher: component on {} missing from world, skipping {} fields",
                    owner.owner,
                    points.len()
                );
                continue;
            };

            for (index, watch) in points.iter_mut().enumerate() {
                let Some(bytes) = replica.raw_field(watch.point.leaf) else {
                    warn!(
                        "DirectWatcher: field '{}' on {} no longer exposes bytes",
                        watch.point.field_name(),
                        owner.owner
                    );
                    continue;
                };
                if bytes.len() != watch.shadow.len() {
                    warn!(
                        "DirectWatcher: field '{}' on {} is {} bytes, expected {}",
                        watch.point.field_name(),
                        owner.owner,
                        bytes.len(),
                        watch.shadow.len()
                    );
                    continue;
                }
                if *bytes != *watch.shadow {
                    watch.shadow.copy_from_slice(bytes);
                    changed.push(ChangedField {
                        owner: *owner,
                        index,
                    });
                }
            }
        }
    }

    /// The point and the value it held at the last detection pass
    pub fn current(&self, changed: &ChangedField) -> Option<(&WatchPoint, Value)> {
        let watch = self.points.get(&changed.owner)?.get(changed.index)?;
        let value = Value::from_raw(watch.point.kind, &watch.shadow)?;
        Some((&watch.point, value))
    }
}
