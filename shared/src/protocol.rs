use crate::{
    world::component::{component_kinds::ComponentKinds, replicate::ReplicateSchema},
    TypeRegistry,
};

pub mod error;
pub use error::ProtocolError;

// Protocol Plugin
pub trait ProtocolPlugin {
    fn build(&self, protocol: &mut Protocol) -> Result<(), ProtocolError>;
}

// Protocol
/// Everything both peers must agree on: which components exist, in which
/// order, and how value types are tagged on the wire
pub struct Protocol {
    pub component_kinds: ComponentKinds,
    pub types: TypeRegistry,
    locked: bool,
}

impl Default for Protocol {
    fn default() -> Self {
        Self {
            component_kinds: ComponentKinds::new(),
            types: TypeRegistry::standard(),
            locked: false,
        }
    }
}

impl Protocol {
    pub fn builder() -> Self {
        Self::default()
    }

    pub fn add_plugin<P: ProtocolPlugin>(&mut self, plugin: P) -> Result<&mut Self, ProtocolError> {
        self.check_lock()?;
        plugin.build(self)?;
        Ok(self)
    }

    /// Registers a component type. Its NetId is its position in registration order.
    pub fn add_component<C: ReplicateSchema>(&mut self) -> Result<&mut Self, ProtocolError> {
        self.check_lock()?;
        self.component_kinds.add_component::<C>()?;
        Ok(self)
    }

    /// Replaces the standard type tag table
    pub fn type_registry(&mut self, types: TypeRegistry) -> Result<&mut Self, ProtocolError> {
        self.check_lock()?;
        self.types = types;
        Ok(self)
    }

    pub fn lock(&mut self) -> Result<&mut Self, ProtocolError> {
        self.check_lock()?;
        self.locked = true;
        Ok(self)
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns Err if protocol is locked
    pub fn check_lock(&self) -> Result<(), ProtocolError> {
        if self.locked {
            Err(ProtocolError::AlreadyLocked)
        } else {
            Ok(())
        }
    }

    pub fn build(&mut self) -> Self {
        std::mem::take(self)
    }
}
