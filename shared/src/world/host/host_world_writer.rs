use tickdiff_serde::BitWrite;

use crate::{
    world::{
        diff_record::DiffRecord,
        host::global_diff_handler::PendingChange,
        visibility::{self, Relationship},
    },
    GroupId, TypeRegistry, UserKey,
};

pub struct HostWorldWriter;

impl HostWorldWriter {
    /// Writes every change this user may see, returning how many records were written
    pub fn write_changes(
        writer: &mut dyn BitWrite,
        types: &TypeRegistry,
        changes: &[PendingChange<'_>],
        user: &UserKey,
        user_group: Option<GroupId>,
    ) -> usize {
        let mut written = 0;

        for change in changes {
            let relationship = Relationship::between(change.ownership.as_ref(), user, user_group);
            if !visibility::resolve(change.point.privacy, relationship) {
                continue;
            }

            let point = change.point;
            DiffRecord::write_parts(
                types,
                writer,
                point.owner.network_id(),
                point.component,
                &point.path,
                &point.key,
                &change.value,
            );
            written += 1;
        }

        written
    }
}
