use tickdiff_shared::GroupId;

// User

/// A connected recipient of replicated changes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct User {
    group: Option<GroupId>,
}

impl User {
    pub fn new(group: Option<GroupId>) -> Self {
        Self { group }
    }

    /// The team the user plays in, if any
    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    pub(crate) fn set_group(&mut self, group: Option<GroupId>) {
        self.group = group;
    }
}
