pub mod error;
pub mod math;
pub mod type_registry;
#[allow(clippy::module_inception)]
pub mod value;
