//! Fixed-size math types that can be replicated.
//!
//! All of them are `#[repr(C)]` plain `f32` aggregates, so a component can expose
//! a field of one of these types as raw bytes and have it watched directly.

use tickdiff_serde::{BitReader, BitWrite, Serde, SerdeErr};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

macro_rules! impl_serde_for_floats {
    ($type:ident { $($field:ident),* }) => {
        impl Serde for $type {
            fn ser(&self, writer: &mut dyn BitWrite) {
                $( self.$field.ser(writer); )*
            }

            fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
                Ok(Self {
                    $( $field: f32::de(reader)?, )*
                })
            }
        }
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, IntoBytes, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl_serde_for_floats!(Vec2 { x, y });

#[derive(Clone, Copy, Debug, Default, PartialEq, IntoBytes, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl_serde_for_floats!(Vec3 { x, y, z });

#[derive(Clone, Copy, Debug, Default, PartialEq, IntoBytes, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl_serde_for_floats!(Vec4 { x, y, z, w });

#[derive(Clone, Copy, Debug, PartialEq, IntoBytes, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl_serde_for_floats!(Quat { x, y, z, w });

#[derive(Clone, Copy, Debug, PartialEq, IntoBytes, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl_serde_for_floats!(Color { r, g, b, a });

/// Row-major 3x3 matrix
#[derive(Clone, Copy, Debug, PartialEq, IntoBytes, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct Mat3 {
    pub rows: [[f32; 3]; 3],
}

/// Row-major 4x4 matrix
#[derive(Clone, Copy, Debug, PartialEq, IntoBytes, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct Mat4 {
    pub rows: [[f32; 4]; 4],
}

macro_rules! impl_matrix {
    ($type:ident, $size:literal) => {
        impl $type {
            pub const IDENTITY: Self = {
                let mut rows = [[0.0; $size]; $size];
                let mut index = 0;
                while index < $size {
                    rows[index][index] = 1.0;
                    index += 1;
                }
                Self { rows }
            };

            pub const fn from_rows(rows: [[f32; $size]; $size]) -> Self {
                Self { rows }
            }
        }

        impl Default for $type {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl Serde for $type {
            fn ser(&self, writer: &mut dyn BitWrite) {
                for row in &self.rows {
                    for column in row {
                        column.ser(writer);
                    }
                }
            }

            fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
                let mut rows = [[0.0; $size]; $size];
                for row in rows.iter_mut() {
                    for column in row.iter_mut() {
                        *column = f32::de(reader)?;
                    }
                }
                Ok(Self { rows })
            }
        }
    };
}

impl_matrix!(Mat3, 3);
impl_matrix!(Mat4, 4);
