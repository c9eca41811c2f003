pub mod component;
pub mod diff_record;
pub mod entity;
pub mod host;
pub mod remote;
pub mod visibility;
pub mod world_type;
