pub mod error;
pub mod remote_world_reader;
