use std::fmt;

use crate::Value;

/// Identifies one field within its parent structure
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name(String),
    Index(u32),
}

impl FieldKey {
    pub fn name(name: &str) -> Self {
        FieldKey::Name(name.to_string())
    }

    /// Keys travel as typed values: names as `Name`, indices as `U32`
    pub fn to_value(&self) -> Value {
        match self {
            FieldKey::Name(name) => Value::Name(name.clone()),
            FieldKey::Index(index) => Value::U32(*index),
        }
    }

    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Name(name) => Some(FieldKey::Name(name)),
            Value::U32(index) => Some(FieldKey::Index(index)),
            _ => None,
        }
    }
}

impl From<&str> for FieldKey {
    fn from(name: &str) -> Self {
        FieldKey::name(name)
    }
}

impl From<u32> for FieldKey {
    fn from(index: u32) -> Self {
        FieldKey::Index(index)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Name(name) => f.write_str(name),
            FieldKey::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// Keys from the component root down to the parent of a leaf field.
/// The leaf key itself is kept separately.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<FieldKey>);

impl FieldPath {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn keys(&self) -> &[FieldKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, key: FieldKey) {
        self.0.push(key);
    }

    pub fn pop(&mut self) -> Option<FieldKey> {
        self.0.pop()
    }

    /// Renders the path followed by the given leaf, e.g. `transform.scale`
    pub fn display_with(&self, leaf: &FieldKey) -> String {
        let mut output = String::new();
        for key in &self.0 {
            output.push_str(&key.to_string());
            output.push('.');
        }
        output.push_str(&leaf.to_string());
        output
    }
}

impl From<Vec<FieldKey>> for FieldPath {
    fn from(keys: Vec<FieldKey>) -> Self {
        Self(keys)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for key in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            first = false;
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

/// Index of a value field within its component, counted depth-first in
/// declaration order over every value field, replicated or not
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LeafId(pub u16);

impl LeafId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}
