use std::collections::{BTreeMap, HashMap};

use crate::ReplicaKey;

/// Watch points grouped by owner, iterated in the order owners were first added
pub struct OwnerPoints<P> {
    owners: BTreeMap<u64, (ReplicaKey, Vec<P>)>,
    sequence: HashMap<ReplicaKey, u64>,
    next_sequence: u64,
}

impl<P> Default for OwnerPoints<P> {
    fn default() -> Self {
        Self {
            owners: BTreeMap::new(),
            sequence: HashMap::new(),
            next_sequence: 0,
        }
    }
}

impl<P> OwnerPoints<P> {
    pub fn push(&mut self, owner: ReplicaKey, point: P) {
        let sequence = match self.sequence.get(&owner) {
            Some(sequence) => *sequence,
            None => {
                let sequence = self.next_sequence;
                self.next_sequence += 1;
                self.sequence.insert(owner, sequence);
                sequence
            }
        };
        self.owners
            .entry(sequence)
            .or_insert_with(|| (owner, Vec::new()))
            .1
            .push(point);
    }

    /// Drops every point of an owner, returning how many there were
    pub fn remove(&mut self, owner: &ReplicaKey) -> usize {
        let Some(sequence) = self.sequence.remove(owner) else {
            return 0;
        };
        self.owners
            .remove(&sequence)
            .map_or(0, |(_, points)| points.len())
    }

    pub fn get(&self, owner: &ReplicaKey) -> Option<&[P]> {
        let sequence = self.sequence.get(owner)?;
        self.owners
            .get(sequence)
            .map(|(_, points)| points.as_slice())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&ReplicaKey, &mut Vec<P>)> {
        self.owners
            .values_mut()
            .map(|(owner, points)| (&*owner, points))
    }

    /// Total number of points across all owners
    pub fn len(&self) -> usize {
        self.owners.values().map(|(_, points)| points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
