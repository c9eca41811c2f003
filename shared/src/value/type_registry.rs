use tickdiff_serde::{BitReader, BitWrite, Serde};

use crate::{
    value::{
        error::{DecodeError, TypeRegistryError},
        math::{Color, Mat3, Mat4, Quat, Vec2, Vec3, Vec4},
        value::{Value, ValueKind},
    },
    NetworkId,
};

/// Wire identifier of a value's runtime type
pub type TypeTag = u8;

const STANDARD_TABLE: [(ValueKind, TypeTag); ValueKind::COUNT] = [
    (ValueKind::Bool, 1),
    (ValueKind::I8, 2),
    (ValueKind::U8, 3),
    (ValueKind::I16, 4),
    (ValueKind::U16, 5),
    (ValueKind::I32, 6),
    (ValueKind::U32, 7),
    (ValueKind::I64, 8),
    (ValueKind::U64, 9),
    (ValueKind::F32, 10),
    (ValueKind::F64, 11),
    (ValueKind::Vec2, 12),
    (ValueKind::Vec3, 13),
    (ValueKind::Vec4, 14),
    (ValueKind::Mat3, 15),
    (ValueKind::Mat4, 16),
    (ValueKind::Color, 17),
    (ValueKind::Quat, 18),
    (ValueKind::NetworkId, 19),
    (ValueKind::Name, 20),
];

/// Bidirectional mapping between value kinds and their wire tags
///
/// Both peers must use the same table. It is built once, owned by the
/// [`Protocol`](crate::Protocol) and only read afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeRegistry {
    tags: [TypeTag; ValueKind::COUNT],
    kinds: [Option<ValueKind>; 256],
}

impl TypeRegistry {
    /// The fixed table every tickdiff peer uses unless configured otherwise
    pub fn standard() -> Self {
        let mut tags = [0; ValueKind::COUNT];
        let mut kinds = [None; 256];
        for (kind, tag) in STANDARD_TABLE {
            tags[kind.index()] = tag;
            kinds[tag as usize] = Some(kind);
        }
        Self { tags, kinds }
    }

    /// Builds a registry from an explicit table. Every kind must appear exactly
    /// once and no tag may be used twice.
    pub fn from_table(
        table: impl IntoIterator<Item = (ValueKind, TypeTag)>,
    ) -> Result<Self, TypeRegistryError> {
        let mut tags = [0; ValueKind::COUNT];
        let mut kinds: [Option<ValueKind>; 256] = [None; 256];

        for (kind, tag) in table {
            if tag == 0 {
                return Err(TypeRegistryError::ReservedTag { kind });
            }
            if tags[kind.index()] != 0 {
                return Err(TypeRegistryError::DuplicateKind { kind });
            }
            if let Some(first) = kinds[tag as usize] {
                return Err(TypeRegistryError::DuplicateTag {
                    tag,
                    first,
                    second: kind,
                });
            }
            tags[kind.index()] = tag;
            kinds[tag as usize] = Some(kind);
        }

        if let Some(kind) = ValueKind::ALL.into_iter().find(|kind| tags[kind.index()] == 0) {
            return Err(TypeRegistryError::MissingKind { kind });
        }

        Ok(Self { tags, kinds })
    }

    pub fn tag_of(&self, kind: ValueKind) -> TypeTag {
        self.tags[kind.index()]
    }

    pub fn kind_of(&self, tag: TypeTag) -> Option<ValueKind> {
        self.kinds[tag as usize]
    }

    /// Writes the value's tag followed by its payload
    pub fn write_value(&self, writer: &mut dyn BitWrite, value: &Value) {
        self.tag_of(value.kind()).ser(writer);

        match value {
            Value::Bool(inner) => inner.ser(writer),
            Value::I8(inner) => inner.ser(writer),
            Value::U8(inner) => inner.ser(writer),
            Value::I16(inner) => inner.ser(writer),
            Value::U16(inner) => inner.ser(writer),
            Value::I32(inner) => inner.ser(writer),
            Value::U32(inner) => inner.ser(writer),
            Value::I64(inner) => inner.ser(writer),
            Value::U64(inner) => inner.ser(writer),
            Value::F32(inner) => inner.ser(writer),
            Value::F64(inner) => inner.ser(writer),
            Value::Vec2(inner) => inner.ser(writer),
            Value::Vec3(inner) => inner.ser(writer),
            Value::Vec4(inner) => inner.ser(writer),
            Value::Mat3(inner) => inner.ser(writer),
            Value::Mat4(inner) => inner.ser(writer),
            Value::Color(inner) => inner.ser(writer),
            Value::Quat(inner) => inner.ser(writer),
            Value::NetworkId(inner) => inner.ser(writer),
            Value::Name(inner) => inner.ser(writer),
        }
    }

    /// Reads a tag and the payload it announces
    pub fn read_value(&self, reader: &mut BitReader) -> Result<Value, DecodeError> {
        let tag = TypeTag::de(reader)?;
        let Some(kind) = self.kind_of(tag) else {
            return Err(DecodeError::UnknownTypeTag { tag });
        };

        let value = match kind {
            ValueKind::Bool => Value::Bool(bool::de(reader)?),
            ValueKind::I8 => Value::I8(i8::de(reader)?),
            ValueKind::U8 => Value::U8(u8::de(reader)?),
            ValueKind::I16 => Value::I16(i16::de(reader)?),
            ValueKind::U16 => Value::U16(u16::de(reader)?),
            ValueKind::I32 => Value::I32(i32::de(reader)?),
            ValueKind::U32 => Value::U32(u32::de(reader)?),
            ValueKind::I64 => Value::I64(i64::de(reader)?),
            ValueKind::U64 => Value::U64(u64::de(reader)?),
            ValueKind::F32 => Value::F32(f32::de(reader)?),
            ValueKind::F64 => Value::F64(f64::de(reader)?),
            ValueKind::Vec2 => Value::Vec2(Vec2::de(reader)?),
            ValueKind::Vec3 => Value::Vec3(Vec3::de(reader)?),
            ValueKind::Vec4 => Value::Vec4(Vec4::de(reader)?),
            ValueKind::Mat3 => Value::Mat3(Mat3::de(reader)?),
            ValueKind::Mat4 => Value::Mat4(Mat4::de(reader)?),
            ValueKind::Color => Value::Color(Color::de(reader)?),
            ValueKind::Quat => Value::Quat(Quat::de(reader)?),
            ValueKind::NetworkId => Value::NetworkId(NetworkId::de(reader)?),
            ValueKind::Name => Value::Name(String::de(reader)?),
        };

        Ok(value)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
