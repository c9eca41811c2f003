use std::any::{type_name, Any};

use crate::{
    world::component::{error::FieldError, field_key::LeafId, schema::ReplicaSchema},
    FromValue, Value,
};

/// A component whose fields can be observed and replicated
///
/// Fields are addressed by the [`LeafId`] their [`ReplicaSchema`] assigned.
/// Direct fields must return their bytes from `raw_field`, accessor fields are
/// read through `read_field`, and every replicated field must accept writes.
pub trait Replicate: Any + Send + Sync {
    /// Stable byte view of a direct field
    fn raw_field(&self, _leaf: LeafId) -> Option<&[u8]> {
        None
    }

    /// Current value of a field
    fn read_field(&self, leaf: LeafId) -> Option<Value>;

    /// Assigns a replicated value to a field
    fn write_field(&mut self, leaf: LeafId, value: &Value) -> Result<(), FieldError>;

    fn to_any(&self) -> &dyn Any;

    fn to_any_mut(&mut self) -> &mut dyn Any;
}

/// Type-level description of a replicable component, read once when the
/// component is added to the Protocol
pub trait ReplicateSchema: Replicate + Sized {
    fn kind_name() -> &'static str {
        let name = type_name::<Self>();
        name.rsplit("::").next().unwrap_or(name)
    }

    fn schema() -> ReplicaSchema;
}

/// Stores `value` into `field` when it carries the field's type
pub fn write_value_into<T: FromValue>(
    field: &mut T,
    leaf: LeafId,
    value: &Value,
) -> Result<(), FieldError> {
    match T::from_value(value) {
        Some(inner) => {
            *field = inner;
            Ok(())
        }
        None => Err(FieldError::KindMismatch {
            leaf: leaf.0,
            expected: type_name::<T>(),
            actual: value.kind(),
        }),
    }
}
