//! Framing of a single field change on the wire.
//!
//! Every record is a sequence of typed values:
//! target id, component net id, a 16-bit count of ancestor keys, the ancestor
//! keys, the leaf key and finally the new value. There is no record count, the
//! end of the buffer terminates the stream.

use tickdiff_serde::{BitReader, BitWrite, Serde};

use crate::{
    world::{
        component::{
            component_kinds::NetId,
            field_key::{FieldKey, FieldPath},
        },
        remote::error::RecordError,
    },
    DecodeError, NetworkId, TypeRegistry, Value,
};

/// A decoded field change addressed by identifiers and keys
#[derive(Clone, Debug, PartialEq)]
pub struct DiffRecord {
    pub target: NetworkId,
    pub component: NetId,
    pub path: FieldPath,
    pub key: FieldKey,
    pub value: Value,
}

impl DiffRecord {
    pub fn write(&self, types: &TypeRegistry, writer: &mut dyn BitWrite) {
        Self::write_parts(
            types,
            writer,
            self.target,
            self.component,
            &self.path,
            &self.key,
            &self.value,
        );
    }

    /// Writes a record from borrowed parts
    pub fn write_parts(
        types: &TypeRegistry,
        writer: &mut dyn BitWrite,
        target: NetworkId,
        component: NetId,
        path: &FieldPath,
        key: &FieldKey,
        value: &Value,
    ) {
        types.write_value(writer, &Value::NetworkId(target));
        types.write_value(writer, &Value::U16(component));

        // schemas cannot nest deeper than a LeafId can count
        let path_length = u16::try_from(path.len()).unwrap_or(u16::MAX);
        path_length.ser(writer);
        for ancestor in path.keys().iter().take(path_length as usize) {
            types.write_value(writer, &ancestor.to_value());
        }

        types.write_value(writer, &key.to_value());
        types.write_value(writer, value);
    }
}

/// A record whose framing has been read but whose contents are not yet checked
#[derive(Clone, Debug, PartialEq)]
pub struct RawDiffRecord {
    pub target: Value,
    pub component: Value,
    pub path: Vec<Value>,
    pub key: Value,
    pub value: Value,
}

impl RawDiffRecord {
    /// Reads the full extent of one record. Errors here are fatal for the buffer.
    pub fn read(
        types: &TypeRegistry,
        reader: &mut BitReader,
        max_path_length: u16,
    ) -> Result<Self, DecodeError> {
        let target = types.read_value(reader)?;
        let component = types.read_value(reader)?;

        let path_length = u16::de(reader)?;
        if path_length > max_path_length {
            return Err(DecodeError::PathTooLong {
                len: path_length,
                max: max_path_length,
            });
        }

        let mut path = Vec::with_capacity(path_length as usize);
        for _ in 0..path_length {
            path.push(types.read_value(reader)?);
        }

        let key = types.read_value(reader)?;
        let value = types.read_value(reader)?;

        Ok(Self {
            target,
            component,
            path,
            key,
            value,
        })
    }
}

impl TryFrom<RawDiffRecord> for DiffRecord {
    type Error = RecordError;

    fn try_from(raw: RawDiffRecord) -> Result<Self, Self::Error> {
        let target = match raw.target {
            Value::NetworkId(target) => target,
            other => {
                return Err(RecordError::NotAnIdentifier {
                    slot: "target",
                    kind: other.kind(),
                })
            }
        };
        let component = match raw.component {
            Value::U16(component) => component,
            other => {
                return Err(RecordError::NotAnIdentifier {
                    slot: "component",
                    kind: other.kind(),
                })
            }
        };

        let mut path = FieldPath::new();
        for value in raw.path {
            path.push(to_field_key(value)?);
        }
        let key = to_field_key(raw.key)?;

        Ok(Self {
            target,
            component,
            path,
            key,
            value: raw.value,
        })
    }
}

fn to_field_key(value: Value) -> Result<FieldKey, RecordError> {
    let kind = value.kind();
    FieldKey::from_value(value).ok_or(RecordError::NotAFieldKey { kind })
}
