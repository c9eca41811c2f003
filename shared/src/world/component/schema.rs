//! Ahead-of-time description of the fields of a replicable component.
//!
//! A [`ReplicaSchema`] lists a component's fields in declaration order, with
//! nested structures inline. Every value field, replicated or not, receives a
//! [`LeafId`] as it is added, counting depth-first. Components use those ids to
//! expose their fields through [`Replicate`](crate::Replicate).

use std::collections::HashSet;

use crate::{
    world::component::{
        error::{FieldError, SchemaError},
        field_key::{FieldKey, FieldPath, LeafId},
    },
    Privacy, ValueKind,
};

/// How a value field can be reached on a live component
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reachability {
    /// The field has a stable in-memory byte view
    Direct,
    /// The field can only be read and written through accessors
    Accessor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldShape {
    Value {
        kind: ValueKind,
        reach: Reachability,
        leaf: LeafId,
    },
    Struct(Vec<FieldSchema>),
    /// A container whose layout changes at runtime
    Dynamic,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSchema {
    key: FieldKey,
    shape: FieldShape,
    privacy: Option<Privacy>,
    replicated: bool,
}

impl FieldSchema {
    fn new(key: impl Into<FieldKey>, shape: FieldShape) -> Self {
        Self {
            key: key.into(),
            shape,
            privacy: None,
            replicated: true,
        }
    }

    /// A value field with a stable byte view, compared byte for byte
    pub fn direct(key: impl Into<FieldKey>, kind: ValueKind) -> Self {
        Self::new(
            key,
            FieldShape::Value {
                kind,
                reach: Reachability::Direct,
                leaf: LeafId(0),
            },
        )
    }

    /// A value field only reachable through getter and setter, compared by value
    pub fn accessor(key: impl Into<FieldKey>, kind: ValueKind) -> Self {
        Self::new(
            key,
            FieldShape::Value {
                kind,
                reach: Reachability::Accessor,
                leaf: LeafId(0),
            },
        )
    }

    pub fn nested(key: impl Into<FieldKey>, fields: Vec<FieldSchema>) -> Self {
        Self::new(key, FieldShape::Struct(fields))
    }

    pub fn dynamic(key: impl Into<FieldKey>) -> Self {
        Self::new(key, FieldShape::Dynamic)
    }

    pub fn with_privacy(mut self, privacy: Privacy) -> Self {
        self.privacy = Some(privacy);
        self
    }

    /// Excludes the field, and anything nested in it, from replication
    pub fn local(mut self) -> Self {
        self.replicated = false;
        self
    }

    pub fn key(&self) -> &FieldKey {
        &self.key
    }

    pub fn shape(&self) -> &FieldShape {
        &self.shape
    }

    pub fn privacy(&self) -> Option<Privacy> {
        self.privacy
    }

    pub fn is_replicated(&self) -> bool {
        self.replicated
    }

    fn assign_leaves(&mut self, next: &mut u32) {
        match &mut self.shape {
            FieldShape::Value { leaf, .. } => {
                *leaf = LeafId(u16::try_from(*next).unwrap_or(u16::MAX));
                *next += 1;
            }
            FieldShape::Struct(children) => {
                for child in children {
                    child.assign_leaves(next);
                }
            }
            FieldShape::Dynamic => {}
        }
    }
}

/// One replicated value field, as the watch strategies see it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatchableField {
    pub path: FieldPath,
    pub key: FieldKey,
    pub leaf: LeafId,
    pub kind: ValueKind,
    pub reach: Reachability,
    /// Most restrictive of the component's, every ancestor's and the field's own
    pub privacy: Privacy,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplicaSchema {
    privacy: Privacy,
    fields: Vec<FieldSchema>,
    leaf_count: u32,
}

impl ReplicaSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Privacy applied to every field of the component
    pub fn with_privacy(mut self, privacy: Privacy) -> Self {
        self.privacy = privacy;
        self
    }

    pub fn field(mut self, mut field: FieldSchema) -> Self {
        field.assign_leaves(&mut self.leaf_count);
        self.fields.push(field);
        self
    }

    pub fn privacy(&self) -> Privacy {
        self.privacy
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn leaf_count(&self) -> u32 {
        self.leaf_count
    }

    /// Walks the schema and lists every replicated value field.
    ///
    /// Fails on the first field neither watch strategy can handle.
    pub fn watchable_fields(&self) -> Result<Vec<WatchableField>, SchemaError> {
        if self.leaf_count > u32::from(u16::MAX) {
            return Err(SchemaError::TooManyFields { max: u16::MAX });
        }

        let mut output = Vec::new();
        let mut path = FieldPath::new();
        Self::walk(&self.fields, &mut path, self.privacy, &mut output)?;
        Ok(output)
    }

    fn walk(
        fields: &[FieldSchema],
        path: &mut FieldPath,
        inherited: Privacy,
        output: &mut Vec<WatchableField>,
    ) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();

        for field in fields {
            if !seen.insert(&field.key) {
                return Err(SchemaError::DuplicateKey {
                    path: path.display_with(&field.key),
                });
            }

            // non-replicated fields are never walked into
            if !field.replicated {
                continue;
            }

            let privacy = inherited.inherit(field.privacy);

            match &field.shape {
                FieldShape::Value { kind, reach, leaf } => {
                    if *reach == Reachability::Direct && kind.fixed_size().is_none() {
                        return Err(SchemaError::VariableSizeDirect {
                            path: path.display_with(&field.key),
                            kind: *kind,
                        });
                    }
                    output.push(WatchableField {
                        path: path.clone(),
                        key: field.key.clone(),
                        leaf: *leaf,
                        kind: *kind,
                        reach: *reach,
                        privacy,
                    });
                }
                FieldShape::Struct(children) => {
                    path.push(field.key.clone());
                    Self::walk(children, path, privacy, output)?;
                    path.pop();
                }
                FieldShape::Dynamic => {
                    return Err(SchemaError::DynamicField {
                        path: path.display_with(&field.key),
                    });
                }
            }
        }

        Ok(())
    }

    /// Follows `path` and `leaf_key` down to a replicated value field
    pub fn resolve(
        &self,
        path: &FieldPath,
        leaf_key: &FieldKey,
    ) -> Result<(LeafId, ValueKind), FieldError> {
        let mut fields = self.fields.as_slice();
        let mut walked = FieldPath::new();

        for key in path.keys() {
            let field = Self::find(fields, &walked, key)?;
            walked.push(key.clone());
            match &field.shape {
                FieldShape::Struct(children) => fields = children.as_slice(),
                _ => {
                    return Err(FieldError::NotAStruct {
                        path: walked.to_string(),
                    })
                }
            }
        }

        let field = Self::find(fields, &walked, leaf_key)?;
        match &field.shape {
            FieldShape::Value { kind, leaf, .. } => Ok((*leaf, *kind)),
            _ => Err(FieldError::NotAValue {
                path: walked.display_with(leaf_key),
            }),
        }
    }

    fn find<'s>(
        fields: &'s [FieldSchema],
        walked: &FieldPath,
        key: &FieldKey,
    ) -> Result<&'s FieldSchema, FieldError> {
        let Some(field) = fields.iter().find(|field| field.key == *key) else {
            return Err(FieldError::MissingField {
                path: walked.display_with(key),
            });
        };
        if !field.replicated {
            return Err(FieldError::NotReplicated {
                path: walked.display_with(key),
            });
        }
        Ok(field)
    }
}
