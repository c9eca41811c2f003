/// PROPERTY-BASED TESTS: Privacy invariants
///
/// Key invariants:
/// 1. A field's effective privacy is never looser than any enclosing level
/// 2. Leaf ids count replicated fields depth-first from zero
/// 3. Visibility only shrinks as privacy tightens

use proptest::prelude::*;
use tickdiff_shared::{
    visibility, FieldKey, FieldSchema, GroupId, LeafId, Ownership, Privacy, ReplicaSchema,
    Relationship, UserKey, ValueKind,
};

#[derive(Clone, Debug)]
struct Node {
    privacy: Option<Privacy>,
    children: Vec<Node>,
}

impl Node {
    fn to_schema(&self, index: u32) -> FieldSchema {
        let field = if self.children.is_empty() {
            FieldSchema::direct(FieldKey::Index(index), ValueKind::U32)
        } else {
            let children = self
                .children
                .iter()
                .zip(0u32..)
                .map(|(child, index)| child.to_schema(index))
                .collect();
            FieldSchema::nested(FieldKey::Index(index), children)
        };
        match self.privacy {
            Some(privacy) => field.with_privacy(privacy),
            None => field,
        }
    }

    fn expected(&self, inherited: Privacy, output: &mut Vec<Privacy>) {
        let privacy = inherited.inherit(self.privacy);
        if self.children.is_empty() {
            output.push(privacy);
        }
        for child in &self.children {
            child.expected(privacy, output);
        }
    }
}

fn privacy_strategy() -> impl Strategy<Value = Privacy> {
    prop_oneof![
        Just(Privacy::Public),
        Just(Privacy::TeamOnly),
        Just(Privacy::Private),
    ]
}

fn relationship_strategy() -> impl Strategy<Value = Relationship> {
    prop_oneof![
        Just(Relationship::IsOwner),
        Just(Relationship::SameGroup),
        Just(Relationship::Unrelated),
    ]
}

fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = proptest::option::of(privacy_strategy()).prop_map(|privacy| Node {
        privacy,
        children: Vec::new(),
    });
    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            proptest::option::of(privacy_strategy()),
            prop::collection::vec(inner, 1..4),
        )
            .prop_map(|(privacy, children)| Node { privacy, children })
    })
}

fn group_strategy() -> impl Strategy<Value = Option<GroupId>> {
    proptest::option::of((0u32..3).prop_map(GroupId::new))
}

proptest! {
    /// Test that effective privacy is the most restrictive level on the way down
    #[test]
    fn prop_effective_privacy_never_loosens(
        component_privacy in privacy_strategy(),
        nodes in prop::collection::vec(node_strategy(), 1..5),
    ) {
        let mut schema = ReplicaSchema::new().with_privacy(component_privacy);
        let mut expected = Vec::new();
        for (node, index) in nodes.iter().zip(0u32..) {
            schema = schema.field(node.to_schema(index));
            node.expected(component_privacy, &mut expected);
        }

        let fields = schema.watchable_fields().unwrap();

        prop_assert_eq!(fields.len(), expected.len());
        prop_assert_eq!(schema.leaf_count() as usize, expected.len());
        for (position, (field, privacy)) in fields.iter().zip(expected).enumerate() {
            prop_assert_eq!(field.privacy, privacy);
            prop_assert!(field.privacy >= component_privacy);
            prop_assert_eq!(field.leaf, LeafId(position as u16));
        }
    }

    /// Test that every field resolves back to the leaf id it was given
    #[test]
    fn prop_watchable_fields_resolve(
        nodes in prop::collection::vec(node_strategy(), 1..5),
    ) {
        let mut schema = ReplicaSchema::new();
        for (node, index) in nodes.iter().zip(0u32..) {
            schema = schema.field(node.to_schema(index));
        }

        for field in schema.watchable_fields().unwrap() {
            let resolved = schema.resolve(&field.path, &field.key);
            prop_assert_eq!(resolved, Ok((field.leaf, ValueKind::U32)));
        }
    }

    /// Test that tightening privacy never reveals a field to more recipients
    #[test]
    fn prop_visibility_is_monotonic(
        looser in privacy_strategy(),
        stricter in privacy_strategy(),
        relationship in relationship_strategy(),
    ) {
        prop_assume!(looser <= stricter);

        if visibility::resolve(stricter, relationship) {
            prop_assert!(visibility::resolve(looser, relationship));
        }
        prop_assert!(visibility::resolve(Privacy::Public, relationship));
        prop_assert!(visibility::resolve(stricter, Relationship::IsOwner));
    }

    /// Test that relationships follow ownership and group membership
    #[test]
    fn prop_relationship_follows_ownership(
        owner in 0u64..4,
        user in 0u64..4,
        owner_group in group_strategy(),
        user_group in group_strategy(),
    ) {
        let ownership = Ownership::new(UserKey::new(owner), owner_group);
        let relationship = Relationship::between(Some(&ownership), &UserKey::new(user), user_group);

        let expected = if owner == user {
            Relationship::IsOwner
        } else if owner_group.is_some() && owner_group == user_group {
            Relationship::SameGroup
        } else {
            Relationship::Unrelated
        };
        prop_assert_eq!(relationship, expected);

        prop_assert_eq!(
            Relationship::between(None, &UserKey::new(user), user_group),
            Relationship::Unrelated
        );
    }
}
