//! Host-side registry for climate entities
//!
//! The ClimatePlatform owns every registered climate entity. It is
//! responsible for:
//! - Assigning entity ids when integrations hand over entities
//! - Routing `climate.*` service calls to the targeted entities
//! - Writing a [`State`] snapshot after every command and update
//!
//! Entities live in a DashMap, so a command holds the shard's exclusive guard
//! for its whole duration and reads hold a shared one. That is the only
//! mutual exclusion an entity needs once it is shared between workers.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use dashmap::DashMap;
use ha_core::{Context, EntityId, ServiceCall, State};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, instrument, trace, warn};

use crate::consts::DOMAIN;
use crate::{ClimateCommand, ClimateEntity, ServiceError, ServiceResult};

/// Registry capability handed to integrations during setup
pub trait AddEntities {
    /// Take ownership of `entities`, returning the ids they were given
    fn add_entities(&self, entities: Vec<Box<dyn ClimateEntity>>) -> Vec<EntityId>;
}

/// The climate platform hosts all climate entities
pub struct ClimatePlatform {
    /// Entities keyed by their generated id
    entities: DashMap<EntityId, Box<dyn ClimateEntity>>,
    /// Last state written for each entity
    states: DashMap<EntityId, State>,
    /// Registration order; also serializes id generation
    order: Mutex<Vec<EntityId>>,
}

impl ClimatePlatform {
    /// Create an empty platform
    pub fn new() -> Self {
        Self {
            entities: DashMap::new(),
            states: DashMap::new(),
            order: Mutex::new(Vec::new()),
        }
    }

    /// Ids of all registered entities, in registration order
    pub fn entity_ids(&self) -> Vec<EntityId> {
        self.order
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of registered entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Read an entity through `f`
    ///
    /// Returns `None` when `entity_id` is malformed or not registered.
    pub fn with_entity<R>(&self, entity_id: &str, f: impl FnOnce(&dyn ClimateEntity) -> R) -> Option<R> {
        let id: EntityId = entity_id.parse().ok()?;
        let entity = self.entities.get(&id)?;
        Some(f(&**entity.value()))
    }

    /// Last state written for an entity
    pub fn state(&self, entity_id: &str) -> Option<State> {
        let id: EntityId = entity_id.parse().ok()?;
        self.states.get(&id).map(|s| s.clone())
    }

    /// Last state of every entity, in registration order
    pub fn states(&self) -> Vec<State> {
        self.entity_ids()
            .iter()
            .filter_map(|id| self.states.get(id).map(|s| s.clone()))
            .collect()
    }

    /// Handle a `climate.*` service call
    ///
    /// Returns the ids of the entities the command was applied to. Whether an
    /// entity accepted the value is not reported: invalid modes and absent
    /// values are dropped by the entity itself.
    #[instrument(skip(self, call), fields(service = %call.service_id()))]
    pub fn call_service(&self, call: &ServiceCall) -> ServiceResult<Vec<EntityId>> {
        if call.domain != DOMAIN {
            return Err(ServiceError::UnknownService {
                domain: call.domain.clone(),
                service: call.service.clone(),
            });
        }

        let command = ClimateCommand::from_service_call(call)?;
        let targets = self.resolve_targets(call);
        let context = call.context.child();

        for id in &targets {
            self.apply(id, command.clone());
            self.write_state(id, context.clone());
        }

        debug!(targets = targets.len(), "Service call handled");
        Ok(targets)
    }

    /// Refresh every entity and rewrite its state
    #[instrument(skip(self))]
    pub fn update_entities(&self) {
        let context = Context::new();
        for id in self.entity_ids() {
            if let Some(mut entity) = self.entities.get_mut(&id) {
                entity.refresh();
            }
            self.write_state(&id, context.clone());
        }
        trace!(count = self.len(), "Entities refreshed");
    }

    /// Call [`ClimatePlatform::update_entities`] every `scan_interval` until
    /// `shutdown` turns true or its sender is dropped
    pub async fn run_updates(&self, scan_interval: Duration, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(scan_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; states were written at registration
        ticker.tick().await;

        info!(interval = ?scan_interval, "Polling climate entities");
        loop {
            if *shutdown.borrow() {
                break;
            }
            tokio::select! {
                _ = ticker.tick() => self.update_entities(),
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }
        info!("Stopped polling climate entities");
    }

    fn resolve_targets(&self, call: &ServiceCall) -> Vec<EntityId> {
        let Some(requested) = call.target_entity_ids() else {
            return self.entity_ids();
        };

        requested
            .into_iter()
            .filter_map(|raw| match raw.parse::<EntityId>() {
                Ok(id) if self.entities.contains_key(&id) => Some(id),
                Ok(id) => {
                    warn!(entity_id = %id, "Service call targets unknown climate entity");
                    None
                }
                Err(e) => {
                    warn!(entity_id = %raw, error = %e, "Ignoring invalid entity_id in service call");
                    None
                }
            })
            .collect()
    }

    fn apply(&self, id: &EntityId, command: ClimateCommand) {
        if let Some(mut entity) = self.entities.get_mut(id) {
            entity.apply(command);
        }
    }

    /// Snapshot the entity into the state table
    fn write_state(&self, id: &EntityId, context: Context) {
        let Some((state, attributes)) = self
            .entities
            .get(id)
            .map(|entity| (entity.state(), entity.state_attributes()))
        else {
            return;
        };

        let new_state = match self.states.get(id) {
            Some(existing) => existing.with_update(state, attributes, context),
            None => State::new(id.clone(), state, attributes, context),
        };

        if let Some(old) = self.states.insert(id.clone(), new_state.clone()) {
            if old != new_state {
                debug!(entity_id = %id, state = %new_state.state, "Climate state changed");
            }
        }
    }
}

impl AddEntities for ClimatePlatform {
    fn add_entities(&self, entities: Vec<Box<dyn ClimateEntity>>) -> Vec<EntityId> {
        let mut added = Vec::with_capacity(entities.len());

        for entity in entities {
            let id = {
                let mut order = self.order.lock().unwrap_or_else(PoisonError::into_inner);
                let id = match EntityId::generate(DOMAIN, entity.name(), |candidate| {
                    self.entities.contains_key(candidate)
                }) {
                    Ok(id) => id,
                    Err(e) => {
                        warn!(name = %entity.name(), error = %e, "Cannot generate entity id");
                        continue;
                    }
                };
                self.entities.insert(id.clone(), entity);
                order.push(id.clone());
                id
            };

            self.write_state(&id, Context::new());
            info!(entity_id = %id, "Registered climate entity");
            added.push(id);
        }

        added
    }
}

impl Default for ClimatePlatform {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe wrapper for ClimatePlatform
pub type SharedClimatePlatform = Arc<ClimatePlatform>;
