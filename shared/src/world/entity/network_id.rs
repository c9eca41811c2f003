use std::fmt;

use tickdiff_serde::{BitReader, BitWrite, Serde, SerdeErr};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Identifier of a replicated Entity, stable across peers
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, IntoBytes, FromBytes, Immutable, KnownLayout,
)]
#[repr(transparent)]
pub struct NetworkId(u32);

impl NetworkId {
    /// Written in place of an Entity id for scene-level singleton components
    pub const INVALID: NetworkId = NetworkId(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Entity({})", self.0)
        } else {
            write!(f, "Singleton")
        }
    }
}

impl Serde for NetworkId {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.0.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self(u32::de(reader)?))
    }
}
