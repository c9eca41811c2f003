//! # Tickdiff Client
//! Decodes buffers of replicated field changes and applies them to the local
//! world, skipping any change it cannot place.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use tickdiff_shared::{BitReader, ReceiveError, ReceiveReport, RecordError, SerdeErr};
}

mod client;

pub use client::{Client, ClientConfig};
