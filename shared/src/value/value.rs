use std::{fmt, mem::size_of};

use zerocopy::{FromBytes, IntoBytes};

use crate::{
    value::math::{Color, Mat3, Mat4, Quat, Vec2, Vec3, Vec4},
    NetworkId,
};

/// The concrete types a replicated field may hold
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ValueKind {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Vec2,
    Vec3,
    Vec4,
    Mat3,
    Mat4,
    Color,
    Quat,
    NetworkId,
    Name,
}

impl ValueKind {
    pub const COUNT: usize = 20;

    pub const ALL: [ValueKind; Self::COUNT] = [
        ValueKind::Bool,
        ValueKind::I8,
        ValueKind::U8,
        ValueKind::I16,
        ValueKind::U16,
        ValueKind::I32,
        ValueKind::U32,
        ValueKind::I64,
        ValueKind::U64,
        ValueKind::F32,
        ValueKind::F64,
        ValueKind::Vec2,
        ValueKind::Vec3,
        ValueKind::Vec4,
        ValueKind::Mat3,
        ValueKind::Mat4,
        ValueKind::Color,
        ValueKind::Quat,
        ValueKind::NetworkId,
        ValueKind::Name,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::I8 => "i8",
            ValueKind::U8 => "u8",
            ValueKind::I16 => "i16",
            ValueKind::U16 => "u16",
            ValueKind::I32 => "i32",
            ValueKind::U32 => "u32",
            ValueKind::I64 => "i64",
            ValueKind::U64 => "u64",
            ValueKind::F32 => "f32",
            ValueKind::F64 => "f64",
            ValueKind::Vec2 => "Vec2",
            ValueKind::Vec3 => "Vec3",
            ValueKind::Vec4 => "Vec4",
            ValueKind::Mat3 => "Mat3",
            ValueKind::Mat4 => "Mat4",
            ValueKind::Color => "Color",
            ValueKind::Quat => "Quat",
            ValueKind::NetworkId => "NetworkId",
            ValueKind::Name => "Name",
        }
    }

    /// In-memory size of the kind, or `None` when it has no fixed size
    /// and therefore cannot be compared byte for byte.
    pub fn fixed_size(self) -> Option<usize> {
        let size = match self {
            ValueKind::Bool => size_of::<bool>(),
            ValueKind::I8 => size_of::<i8>(),
            ValueKind::U8 => size_of::<u8>(),
            ValueKind::I16 => size_of::<i16>(),
            ValueKind::U16 => size_of::<u16>(),
            ValueKind::I32 => size_of::<i32>(),
            ValueKind::U32 => size_of::<u32>(),
            ValueKind::I64 => size_of::<i64>(),
            ValueKind::U64 => size_of::<u64>(),
            ValueKind::F32 => size_of::<f32>(),
            ValueKind::F64 => size_of::<f64>(),
            ValueKind::Vec2 => size_of::<Vec2>(),
            ValueKind::Vec3 => size_of::<Vec3>(),
            ValueKind::Vec4 => size_of::<Vec4>(),
            ValueKind::Mat3 => size_of::<Mat3>(),
            ValueKind::Mat4 => size_of::<Mat4>(),
            ValueKind::Color => size_of::<Color>(),
            ValueKind::Quat => size_of::<Quat>(),
            ValueKind::NetworkId => size_of::<NetworkId>(),
            ValueKind::Name => return None,
        };
        Some(size)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically typed replicated value
///
/// Equality is bitwise for floating point data: `NaN` equals itself and `-0.0`
/// differs from `0.0`, which matches what a raw byte comparison of the field sees.
#[derive(Clone, Debug)]
pub enum Value {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat3(Mat3),
    Mat4(Mat4),
    Color(Color),
    Quat(Quat),
    NetworkId(NetworkId),
    Name(String),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::I8(_) => ValueKind::I8,
            Value::U8(_) => ValueKind::U8,
            Value::I16(_) => ValueKind::I16,
            Value::U16(_) => ValueKind::U16,
            Value::I32(_) => ValueKind::I32,
            Value::U32(_) => ValueKind::U32,
            Value::I64(_) => ValueKind::I64,
            Value::U64(_) => ValueKind::U64,
            Value::F32(_) => ValueKind::F32,
            Value::F64(_) => ValueKind::F64,
            Value::Vec2(_) => ValueKind::Vec2,
            Value::Vec3(_) => ValueKind::Vec3,
            Value::Vec4(_) => ValueKind::Vec4,
            Value::Mat3(_) => ValueKind::Mat3,
            Value::Mat4(_) => ValueKind::Mat4,
            Value::Color(_) => ValueKind::Color,
            Value::Quat(_) => ValueKind::Quat,
            Value::NetworkId(_) => ValueKind::NetworkId,
            Value::Name(_) => ValueKind::Name,
        }
    }

    /// Rebuilds a value from the in-memory bytes of a field of the given kind.
    /// Returns `None` if the kind has no fixed size or the length does not match.
    pub fn from_raw(kind: ValueKind, bytes: &[u8]) -> Option<Value> {
        let value = match kind {
            ValueKind::Bool => Value::Bool(u8::from_ne_bytes(bytes.try_into().ok()?) != 0),
            ValueKind::I8 => Value::I8(i8::from_ne_bytes(bytes.try_into().ok()?)),
            ValueKind::U8 => Value::U8(u8::from_ne_bytes(bytes.try_into().ok()?)),
            ValueKind::I16 => Value::I16(i16::from_ne_bytes(bytes.try_into().ok()?)),
            ValueKind::U16 => Value::U16(u16::from_ne_bytes(bytes.try_into().ok()?)),
            ValueKind::I32 => Value::I32(i32::from_ne_bytes(bytes.try_into().ok()?)),
            ValueKind::U32 => Value::U32(u32::from_ne_bytes(bytes.try_into().ok()?)),
            ValueKind::I64 => Value::I64(i64::from_ne_bytes(bytes.try_into().ok()?)),
            ValueKind::U64 => Value::U64(u64::from_ne_bytes(bytes.try_into().ok()?)),
            ValueKind::F32 => Value::F32(f32::from_ne_bytes(bytes.try_into().ok()?)),
            ValueKind::F64 => Value::F64(f64::from_ne_bytes(bytes.try_into().ok()?)),
            ValueKind::Vec2 => Value::Vec2(Vec2::read_from_bytes(bytes).ok()?),
            ValueKind::Vec3 => Value::Vec3(Vec3::read_from_bytes(bytes).ok()?),
            ValueKind::Vec4 => Value::Vec4(Vec4::read_from_bytes(bytes).ok()?),
            ValueKind::Mat3 => Value::Mat3(Mat3::read_from_bytes(bytes).ok()?),
            ValueKind::Mat4 => Value::Mat4(Mat4::read_from_bytes(bytes).ok()?),
            ValueKind::Color => Value::Color(Color::read_from_bytes(bytes).ok()?),
            ValueKind::Quat => Value::Quat(Quat::read_from_bytes(bytes).ok()?),
            ValueKind::NetworkId => Value::NetworkId(NetworkId::read_from_bytes(bytes).ok()?),
            ValueKind::Name => return None,
        };
        Some(value)
    }

    /// Extracts the payload if it has type `T`
    pub fn get<T: FromValue>(&self) -> Option<T> {
        T::from_value(self)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::I8(a), Value::I8(b)) => a == b,
            (Value::U8(a), Value::U8(b)) => a == b,
            (Value::I16(a), Value::I16(b)) => a == b,
            (Value::U16(a), Value::U16(b)) => a == b,
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::U32(a), Value::U32(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::U64(a), Value::U64(b)) => a == b,
            (Value::F32(a), Value::F32(b)) => a.to_bits() == b.to_bits(),
            (Value::F64(a), Value::F64(b)) => a.to_bits() == b.to_bits(),
            (Value::Vec2(a), Value::Vec2(b)) => a.as_bytes() == b.as_bytes(),
            (Value::Vec3(a), Value::Vec3(b)) => a.as_bytes() == b.as_bytes(),
            (Value::Vec4(a), Value::Vec4(b)) => a.as_bytes() == b.as_bytes(),
            (Value::Mat3(a), Value::Mat3(b)) => a.as_bytes() == b.as_bytes(),
            (Value::Mat4(a), Value::Mat4(b)) => a.as_bytes() == b.as_bytes(),
            (Value::Color(a), Value::Color(b)) => a.as_bytes() == b.as_bytes(),
            (Value::Quat(a), Value::Quat(b)) => a.as_bytes() == b.as_bytes(),
            (Value::NetworkId(a), Value::NetworkId(b)) => a == b,
            (Value::Name(a), Value::Name(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

/// Conversion out of a `Value`, used by components when a replicated write arrives
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_value_conversions {
    ($($variant:ident => $type:ty),*) => {
        $(
            impl From<$type> for Value {
                fn from(value: $type) -> Self {
                    Value::$variant(value)
                }
            }

            impl FromValue for $type {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(inner.clone()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_value_conversions!(
    Bool => bool,
    I8 => i8,
    U8 => u8,
    I16 => i16,
    U16 => u16,
    I32 => i32,
    U32 => u32,
    I64 => i64,
    U64 => u64,
    F32 => f32,
    F64 => f64,
    Vec2 => Vec2,
    Vec3 => Vec3,
    Vec4 => Vec4,
    Mat3 => Mat3,
    Mat4 => Mat4,
    Color => Color,
    Quat => Quat,
    NetworkId => NetworkId,
    Name => String
);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Name(value.to_string())
    }
}
