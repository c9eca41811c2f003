use log::warn;

use tickdiff_serde::BitReader;

use crate::{
    world::{
        diff_record::{DiffRecord, RawDiffRecord},
        remote::error::{ReceiveError, RecordError},
    },
    ComponentKinds, FieldError, ReplicaKey, TypeRegistry, WorldMutType,
};

/// Outcome of reading one buffer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReceiveReport {
    pub applied: usize,
    /// Records that were read in full but could not be applied, in buffer order
    pub skipped: Vec<RecordError>,
}

pub struct RemoteWorldReader;

impl RemoteWorldReader {
    /// Reads and applies records until the buffer is exhausted.
    ///
    /// A record that cannot be applied is skipped without disturbing the
    /// ones after it. A framing error stops the read; records applied before
    /// it stay applied.
    pub fn read_records<W: WorldMutType>(
        world: &mut W,
        component_kinds: &ComponentKinds,
        types: &TypeRegistry,
        reader: &mut BitReader,
        max_path_length: u16,
    ) -> Result<ReceiveReport, ReceiveError> {
        let mut report = ReceiveReport::default();

        // a type tag is 8 bits, so trailing padding can never start a record
        while reader.bits_remaining() >= 8 {
            let raw = match RawDiffRecord::read(types, reader, max_path_length) {
                Ok(raw) => raw,
                Err(source) => {
                    warn!(
                        "RemoteWorldReader: malformed buffer after {} records: {}",
                        report.applied, source
                    );
                    return Err(ReceiveError::Malformed {
                        applied: report.applied,
                        skipped: report.skipped,
                        source,
                    });
                }
            };

            match Self::apply(world, component_kinds, raw) {
                Ok(()) => report.applied += 1,
                Err(reason) => {
                    warn!("RemoteWorldReader: skipping record: {}", reason);
                    report.skipped.push(reason);
                }
            }
        }

        Ok(report)
    }

    fn apply<W: WorldMutType>(
        world: &mut W,
        component_kinds: &ComponentKinds,
        raw: RawDiffRecord,
    ) -> Result<(), RecordError> {
        let record = DiffRecord::try_from(raw)?;

        let component_kind = component_kinds
            .net_id_to_kind(&record.component)
            .map_err(|_| RecordError::UnknownComponent {
                net_id: record.component,
            })?;
        let component_name = component_kinds.kind_to_name(&component_kind);

        let key = ReplicaKey::entity(record.target, component_kind);
        let Some(replica) = world.replica_mut(&key) else {
            return Err(RecordError::UnresolvedTarget {
                target: record.target.to_string(),
                component: component_name,
            });
        };

        let path = record.path.display_with(&record.key);
        let schema = component_kinds
            .schema(&component_kind)
            .map_err(|_| RecordError::UnknownComponent {
                net_id: record.component,
            })?;
        let (leaf, kind) =
            schema
                .resolve(&record.path, &record.key)
                .map_err(|source| RecordError::Field {
                    component: component_name.clone(),
                    path: path.clone(),
                    source,
                })?;

        if record.value.kind() != kind {
            return Err(RecordError::ValueRejected {
                component: component_name,
                path,
                source: FieldError::KindMismatch {
                    leaf: leaf.0,
                    expected: kind.name(),
                    actual: record.value.kind(),
                },
            });
        }

        replica
            .write_field(leaf, &record.value)
            .map_err(|source| RecordError::ValueRejected {
                component: component_name,
                path,
                source,
            })
    }
}
