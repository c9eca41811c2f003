use std::collections::BTreeMap;

use log::{debug, info, warn};

use tickdiff_shared::{
    BitWriter, ComponentKind, GlobalDiffHandler, GroupId, HostWorldWriter, NetworkId, Protocol,
    RegisterOutcome, ReplicaKey, Tick, UserKey, WorldRefType,
};

use crate::{ServerConfig, ServerError, Transport, User};

/// Summary of one call to [`Server::tick`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    pub tick: Tick,
    /// Fields found changed, before any per-user filtering
    pub changed: usize,
    /// Buffers accepted by the transport
    pub sent: usize,
    /// Records written across all buffers
    pub records: usize,
}

/// The sending side of replication. Watches registered components and, once
/// per tick, sends each connected user the changes it may see.
pub struct Server {
    config: ServerConfig,
    protocol: Protocol,
    diff_handler: GlobalDiffHandler,
    users: BTreeMap<UserKey, User>,
    tick: Tick,
}

impl Server {
    /// Create a new Server
    pub fn new<P: Into<Protocol>>(server_config: ServerConfig, protocol: P) -> Self {
        Self {
            config: server_config,
            protocol: protocol.into(),
            diff_handler: GlobalDiffHandler::new(),
            users: BTreeMap::new(),
            tick: 0,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    /// The tick the next call to `tick()` will report
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    // Users

    /// Adds a recipient. Changes are sent to it from the next tick on.
    pub fn connect_user(
        &mut self,
        user_key: UserKey,
        group: Option<GroupId>,
    ) -> Result<(), ServerError> {
        if self.users.contains_key(&user_key) {
            return Err(ServerError::UserAlreadyConnected {
                user_key: user_key.to_string(),
            });
        }

        info!("Server: {} connected, group {:?}", user_key, group);
        self.users.insert(user_key, User::new(group));
        Ok(())
    }

    pub fn disconnect_user(&mut self, user_key: &UserKey) -> Result<User, ServerError> {
        let Some(user) = self.users.remove(user_key) else {
            return Err(ServerError::UserNotFound {
                user_key: user_key.to_string(),
            });
        };

        info!("Server: {} disconnected", user_key);
        Ok(user)
    }

    /// Moves a user into another group, or out of any group
    pub fn set_user_group(
        &mut self,
        user_key: &UserKey,
        group: Option<GroupId>,
    ) -> Result<(), ServerError> {
        let Some(user) = self.users.get_mut(user_key) else {
            return Err(ServerError::UserNotFound {
                user_key: user_key.to_string(),
            });
        };

        user.set_group(group);
        Ok(())
    }

    pub fn user(&self, user_key: &UserKey) -> Option<&User> {
        self.users.get(user_key)
    }

    /// Connected users, in ascending key order
    pub fn user_keys(&self) -> impl Iterator<Item = &UserKey> {
        self.users.keys()
    }

    pub fn users_count(&self) -> usize {
        self.users.len()
    }

    // Components

    /// Starts watching one component instance
    pub fn register_component<W: WorldRefType>(
        &mut self,
        world: &W,
        key: &ReplicaKey,
    ) -> Result<RegisterOutcome, ServerError> {
        let outcome = self.diff_handler.register_component(
            world,
            &self.protocol.component_kinds,
            key,
            self.config.skip_restricted_singletons,
        )?;
        Ok(outcome)
    }

    /// Starts watching every replicable component the world lists for an
    /// Entity. Components missing from the Protocol are skipped. If any of the
    /// others fails, the ones registered by this call are unregistered again.
    pub fn register_entity<W: WorldRefType>(
        &mut self,
        world: &W,
        network_id: &NetworkId,
    ) -> Result<usize, ServerError> {
        let mut registered = Vec::new();
        let mut fields = 0;

        for component_kind in world.component_kinds(network_id) {
            if !self.protocol.component_kinds.contains(&component_kind) {
                debug!(
                    "Server: {} has a component outside the Protocol, not watching it",
                    network_id
                );
                continue;
            }

            let key = ReplicaKey::entity(*network_id, component_kind);
            match self.register_component(world, &key) {
                Ok(outcome) => {
                    if let RegisterOutcome::Watching(count) = outcome {
                        fields += count;
                    }
                    registered.push(key);
                }
                Err(error) => {
                    for key in &registered {
                        self.diff_handler.deregister_component(key);
                    }
                    return Err(error);
                }
            }
        }

        Ok(fields)
    }

    /// Starts watching a scene-level singleton component
    pub fn register_singleton<W: WorldRefType>(
        &mut self,
        world: &W,
        component_kind: ComponentKind,
    ) -> Result<RegisterOutcome, ServerError> {
        self.register_component(world, &ReplicaKey::singleton(component_kind))
    }

    /// Stops watching one component instance. Unknown keys are ignored.
    pub fn unregister_component(&mut self, key: &ReplicaKey) -> usize {
        self.diff_handler.deregister_component(key)
    }

    /// Stops watching every component of an Entity. Unknown Entities are ignored.
    pub fn unregister_entity(&mut self, network_id: &NetworkId) -> usize {
        self.diff_handler.deregister_entity(network_id)
    }

    pub fn is_registered(&self, key: &ReplicaKey) -> bool {
        self.diff_handler.is_registered(key)
    }

    // Ticks

    /// Detects changed fields once, then writes and sends one buffer per
    /// connected user holding only the changes that user may see
    pub fn tick<W: WorldRefType, T: Transport>(
        &mut self,
        world: &W,
        transport: &mut T,
    ) -> TickReport {
        let changed = self.diff_handler.detect_changes(world);
        let changes = self.diff_handler.pending_changes(world);

        let mut sent = 0;
        let mut records = 0;

        for (user_key, user) in self.users.iter() {
            let mut writer = BitWriter::with_capacity(self.config.initial_buffer_capacity);
            let written = HostWorldWriter::write_changes(
                &mut writer,
                &self.protocol.types,
                &changes,
                user_key,
                user.group(),
            );

            if written == 0 && !self.config.send_empty_buffers {
                continue;
            }
            records += written;

            match transport.send(user_key, writer.to_bytes()) {
                Ok(()) => sent += 1,
                Err(error) => warn!("Server: could not send tick {} to {}: {}", self.tick, user_key, error),
            }
        }

        debug!(
            "Server: tick {} found {} changed fields, wrote {} records into {} buffers",
            self.tick, changed, records, sent
        );

        let report = TickReport {
            tick: self.tick,
            changed,
            sent,
            records,
        };
        self.tick = self.tick.wrapping_add(1);
        report
    }
}
