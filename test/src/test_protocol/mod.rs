//! Components shared by the end-to-end tests

use std::any::Any;

use tickdiff_shared::{
    write_value_into, FieldError, FieldSchema, LeafId, Privacy, Protocol, ProtocolError,
    ProtocolPlugin, Quat, ReplicaSchema, Replicate, ReplicateSchema, Value, ValueKind, Vec3,
};
use zerocopy::IntoBytes;

macro_rules! impl_any {
    () => {
        fn to_any(&self) -> &dyn Any {
            self
        }

        fn to_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    };
}

// Avatar

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub rotation: Quat,
}

/// An owned object mixing every kind of field: direct and accessor, nested,
/// public, team-only and private, plus one field that never replicates
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Avatar {
    pub position: Vec3,
    pub score: u32,
    pub secret: u32,
    nickname: String,
    pub transform: Transform,
    pub frames: u64,
}

impl Avatar {
    pub const POSITION: LeafId = LeafId(0);
    pub const SCORE: LeafId = LeafId(1);
    pub const SECRET: LeafId = LeafId(2);
    pub const NICKNAME: LeafId = LeafId(3);
    pub const SCALE: LeafId = LeafId(4);
    pub const ROTATION: LeafId = LeafId(5);
    pub const FRAMES: LeafId = LeafId(6);

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn set_nickname(&mut self, nickname: &str) {
        self.nickname = nickname.to_string();
    }
}

impl Replicate for Avatar {
    fn raw_field(&self, leaf: LeafId) -> Option<&[u8]> {
        match leaf {
            Self::POSITION => Some(self.position.as_bytes()),
            Self::SCORE => Some(self.score.as_bytes()),
            Self::SECRET => Some(self.secret.as_bytes()),
            Self::SCALE => Some(self.transform.scale.as_bytes()),
            Self::ROTATION => Some(self.transform.rotation.as_bytes()),
            Self::FRAMES => Some(self.frames.as_bytes()),
            _ => None,
        }
    }

    fn read_field(&self, leaf: LeafId) -> Option<Value> {
        let value = match leaf {
            Self::POSITION => Value::Vec3(self.position),
            Self::SCORE => Value::U32(self.score),
            Self::SECRET => Value::U32(self.secret),
            Self::NICKNAME => Value::Name(self.nickname.clone()),
            Self::SCALE => Value::F32(self.transform.scale),
            Self::ROTATION => Value::Quat(self.transform.rotation),
            Self::FRAMES => Value::U64(self.frames),
            _ => return None,
        };
        Some(value)
    }

    fn write_field(&mut self, leaf: LeafId, value: &Value) -> Result<(), FieldError> {
        match leaf {
            Self::POSITION => write_value_into(&mut self.position, leaf, value),
            Self::SCORE => write_value_into(&mut self.score, leaf, value),
            Self::SECRET => write_value_into(&mut self.secret, leaf, value),
            Self::NICKNAME => write_value_into(&mut self.nickname, leaf, value),
            Self::SCALE => write_value_into(&mut self.transform.scale, leaf, value),
            Self::ROTATION => write_value_into(&mut self.transform.rotation, leaf, value),
            _ => Err(FieldError::UnknownLeaf { leaf: leaf.0 }),
        }
    }

    impl_any!();
}

impl ReplicateSchema for Avatar {
    fn schema() -> ReplicaSchema {
        ReplicaSchema::new()
            .field(FieldSchema::direct("position", ValueKind::Vec3))
            .field(FieldSchema::direct("score", ValueKind::U32))
            .field(FieldSchema::direct("secret", ValueKind::U32).with_privacy(Privacy::Private))
            .field(FieldSchema::accessor("nickname", ValueKind::Name))
            .field(
                FieldSchema::nested(
                    "transform",
                    vec![
                        FieldSchema::direct("scale", ValueKind::F32),
                        FieldSchema::direct("rotation", ValueKind::Quat)
                            .with_privacy(Privacy::Private),
                    ],
                )
                .with_privacy(Privacy::TeamOnly),
            )
            .field(FieldSchema::direct("frames", ValueKind::U64).local())
    }
}

// Stamina

/// Replicates a derived value that only exists behind accessors
#[derive(Clone, Debug, PartialEq)]
pub struct Stamina {
    pub current: f32,
    pub max: f32,
}

impl Stamina {
    pub const PERCENT: LeafId = LeafId(0);

    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max * 100.0
    }

    pub fn set_percent(&mut self, percent: f32) -> Result<(), String> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(format!("{} is not a percentage", percent));
        }
        self.current = self.max * percent / 100.0;
        Ok(())
    }
}

impl Replicate for Stamina {
    fn read_field(&self, leaf: LeafId) -> Option<Value> {
        match leaf {
            Self::PERCENT => Some(Value::F32(self.percent())),
            _ => None,
        }
    }

    fn write_field(&mut self, leaf: LeafId, value: &Value) -> Result<(), FieldError> {
        if leaf != Self::PERCENT {
            return Err(FieldError::UnknownLeaf { leaf: leaf.0 });
        }
        let mut percent = 0.0f32;
        write_value_into(&mut percent, leaf, value)?;
        self.set_percent(percent)
            .map_err(|reason| FieldError::ValueRejected {
                leaf: leaf.0,
                reason,
            })
    }

    impl_any!();
}

impl ReplicateSchema for Stamina {
    fn schema() -> ReplicaSchema {
        ReplicaSchema::new()
            .field(FieldSchema::accessor("percent", ValueKind::F32))
            .field(FieldSchema::direct("max", ValueKind::F32).local())
    }
}

// MatchState

/// Scene-level state every user sees
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchState {
    pub round: u16,
    pub phase: String,
}

impl MatchState {
    pub const ROUND: LeafId = LeafId(0);
    pub const PHASE: LeafId = LeafId(1);
}

impl Replicate for MatchState {
    fn raw_field(&self, leaf: LeafId) -> Option<&[u8]> {
        match leaf {
            Self::ROUND => Some(self.round.as_bytes()),
            _ => None,
        }
    }

    fn read_field(&self, leaf: LeafId) -> Option<Value> {
        match leaf {
            Self::ROUND => Some(Value::U16(self.round)),
            Self::PHASE => Some(Value::Name(self.phase.clone())),
            _ => None,
        }
    }

    fn write_field(&mut self, leaf: LeafId, value: &Value) -> Result<(), FieldError> {
        match leaf {
            Self::ROUND => write_value_into(&mut self.round, leaf, value),
            Self::PHASE => write_value_into(&mut self.phase, leaf, value),
            _ => Err(FieldError::UnknownLeaf { leaf: leaf.0 }),
        }
    }

    impl_any!();
}

impl ReplicateSchema for MatchState {
    fn schema() -> ReplicaSchema {
        ReplicaSchema::new()
            .field(FieldSchema::direct("round", ValueKind::U16))
            .field(FieldSchema::accessor("phase", ValueKind::Name))
    }
}

// ServerSecrets

/// A singleton nobody may see
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServerSecrets {
    pub seed: u64,
}

impl ServerSecrets {
    pub const SEED: LeafId = LeafId(0);
}

impl Replicate for ServerSecrets {
    fn raw_field(&self, leaf: LeafId) -> Option<&[u8]> {
        (leaf == Self::SEED).then(|| self.seed.as_bytes())
    }

    fn read_field(&self, leaf: LeafId) -> Option<Value> {
        (leaf == Self::SEED).then_some(Value::U64(self.seed))
    }

    fn write_field(&mut self, leaf: LeafId, value: &Value) -> Result<(), FieldError> {
        write_value_into(&mut self.seed, leaf, value)
    }

    impl_any!();
}

impl ReplicateSchema for ServerSecrets {
    fn schema() -> ReplicaSchema {
        ReplicaSchema::new()
            .with_privacy(Privacy::Private)
            .field(FieldSchema::direct("seed", ValueKind::U64))
    }
}

// Protocol

pub struct GamePlugin;

impl ProtocolPlugin for GamePlugin {
    fn build(&self, protocol: &mut Protocol) -> Result<(), ProtocolError> {
        protocol
            .add_component::<Avatar>()?
            .add_component::<Stamina>()?
            .add_component::<MatchState>()?
            .add_component::<ServerSecrets>()?;
        Ok(())
    }
}

/// The protocol both ends of every test are built from
pub fn protocol() -> Protocol {
    let mut protocol = Protocol::builder();
    match protocol.add_plugin(GamePlugin) {
        Ok(protocol) => protocol.build(),
        Err(error) => panic!("test protocol is invalid: {}", error),
    }
}
