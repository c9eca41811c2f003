//! # Tickdiff Shared
//! Common functionality shared between tickdiff-server & tickdiff-client crates.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use tickdiff_serde::{
    BitReader, BitWrite, BitWriter, Serde, SerdeErr, SerdeIntegerConversion, SignedInteger,
    SignedVariableInteger, UnsignedInteger, UnsignedVariableInteger,
};

mod protocol;
mod types;
mod value;
mod world;

pub use protocol::{Protocol, ProtocolError, ProtocolPlugin};
pub use types::Tick;
pub use value::{
    error::{DecodeError, TypeRegistryError},
    math::{Color, Mat3, Mat4, Quat, Vec2, Vec3, Vec4},
    type_registry::{TypeRegistry, TypeTag},
    value::{FromValue, Value, ValueKind},
};
pub use world::{
    component::{
        component_kinds::{ComponentKind, ComponentKinds, NetId},
        error::{ComponentError, FieldError, SchemaError},
        field_key::{FieldKey, FieldPath, LeafId},
        replicate::{write_value_into, Replicate, ReplicateSchema},
        schema::{FieldSchema, FieldShape, Reachability, ReplicaSchema, WatchableField},
    },
    diff_record::{DiffRecord, RawDiffRecord},
    entity::{
        network_id::NetworkId,
        ownership::{GroupId, Ownership, UserKey},
        replica_key::{ReplicaKey, ReplicaOwner},
    },
    host::{
        error::RegisterError,
        global_diff_handler::{GlobalDiffHandler, PendingChange, RegisterOutcome},
        host_world_writer::HostWorldWriter,
        watch_point::{ChangedField, WatchPoint},
        watch_strategy::WatchStrategy,
    },
    remote::{
        error::{ReceiveError, RecordError},
        remote_world_reader::{ReceiveReport, RemoteWorldReader},
    },
    visibility::{self, Privacy, Relationship},
    world_type::{WorldMutType, WorldRefType},
};
