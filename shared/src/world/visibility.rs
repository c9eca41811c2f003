//! Decides whether a field change may be shown to a given recipient.

use crate::{GroupId, Ownership, UserKey};

/// How widely a field may be replicated. Ordered from least to most restrictive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Privacy {
    /// Sent to every recipient
    #[default]
    Public,
    /// Sent to the owner and to recipients in the owner's group
    TeamOnly,
    /// Sent to the owner only
    Private,
}

impl Privacy {
    /// Privacy only ever tightens on the way down a structure
    pub fn inherit(self, declared: Option<Privacy>) -> Privacy {
        match declared {
            Some(declared) => self.max(declared),
            None => self,
        }
    }
}

/// The standing of a recipient towards the owner of a replicated object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relationship {
    IsOwner,
    SameGroup,
    Unrelated,
}

impl Relationship {
    /// Objects without an owner, singletons included, are unrelated to everyone
    pub fn between(
        ownership: Option<&Ownership>,
        user: &UserKey,
        user_group: Option<GroupId>,
    ) -> Relationship {
        let Some(ownership) = ownership else {
            return Relationship::Unrelated;
        };

        if ownership.owner == *user {
            return Relationship::IsOwner;
        }

        match (ownership.group, user_group) {
            (Some(owner_group), Some(user_group)) if owner_group == user_group => {
                Relationship::SameGroup
            }
            _ => Relationship::Unrelated,
        }
    }
}

/// Whether a field with `privacy` may be sent to a recipient with `relationship`
pub fn resolve(privacy: Privacy, relationship: Relationship) -> bool {
    match privacy {
        Privacy::Public => true,
        Privacy::TeamOnly => matches!(
            relationship,
            Relationship::IsOwner | Relationship::SameGroup
        ),
        Privacy::Private => relationship == Relationship::IsOwner,
    }
}
