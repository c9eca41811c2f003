//! # Tickdiff Server
//! Watches registered components each tick, and sends every connected user
//! the field changes it is allowed to see.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod transport;
pub mod shared {
    pub use tickdiff_shared::{
        BitReader, BitWrite, BitWriter, GroupId, NetworkId, Ownership, Privacy, Serde, SerdeErr,
        Tick, UserKey,
    };
}

mod error;
mod server;
mod user;

pub use error::ServerError;
pub use server::{Server, ServerConfig, TickReport};
pub use transport::{SendError, Transport};
pub use user::User;
