pub mod component_kinds;
pub mod error;
pub mod field_key;
pub mod replicate;
pub mod schema;
