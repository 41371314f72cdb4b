// src/services/livestock_service.rs
//
// Livestock Registry
//
// Owns the record store and implements create / get / list / update / delete.
// Mutations run one at a time under `write_lock`; reads go straight to the
// repository.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{
    validate_livestock, validate_payload, Livestock, LivestockPayload, ValidationPolicy,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, LivestockCreated, LivestockDeleted, LivestockUpdated};
use crate::infrastructure::{Clock, IdGenerator, IdentitySource};
use crate::repositories::LivestockRepository;

pub struct LivestockService {
    repo: Arc<dyn LivestockRepository>,
    clock: Arc<dyn Clock>,
    identity: Arc<dyn IdentitySource>,
    ids: Arc<dyn IdGenerator>,
    event_bus: Arc<EventBus>,
    validation: ValidationPolicy,
    write_lock: Mutex<()>,
}

impl LivestockService {
    pub fn new(
        repo: Arc<dyn LivestockRepository>,
        clock: Arc<dyn Clock>,
        identity: Arc<dyn IdentitySource>,
        ids: Arc<dyn IdGenerator>,
        event_bus: Arc<EventBus>,
        validation: ValidationPolicy,
    ) -> Self {
        Self {
            repo,
            clock,
            identity,
            ids,
            event_bus,
            validation,
            write_lock: Mutex::new(()),
        }
    }

    /// Register a new record owned by the current caller.
    ///
    /// Fails with `Generation` rather than overwrite if the generated id is
    /// already taken.
    pub fn create_livestock(&self, payload: LivestockPayload) -> AppResult<Livestock> {
        self.check_payload(&payload)?;

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let id = self.ids.generate()?;
        if self.repo.exists(&id)? {
            log::error!("Generated id {} collides with an existing record", id);
            return Err(AppError::Generation(format!(
                "identifier {} is already in use",
                id
            )));
        }

        let livestock = Livestock::create(id, payload, self.identity.caller(), self.clock.now());
        validate_livestock(&livestock)?;
        self.repo.save(&livestock)?;

        log::info!(
            "Created livestock {} ({}) for {}",
            livestock.id,
            livestock.name,
            livestock.owner
        );
        self.event_bus.emit(LivestockCreated::new(
            livestock.id.clone(),
            livestock.name.clone(),
            livestock.owner.clone(),
        ));

        Ok(livestock)
    }

    pub fn get_livestock_by_id(&self, id: &str) -> AppResult<Livestock> {
        log::debug!("Fetching livestock {}", id);

        self.repo.get_by_id(id)?.ok_or_else(|| {
            log::warn!("Livestock {} not found", id);
            AppError::livestock_not_found(id)
        })
    }

    /// Every record whose name equals `name` ignoring case.
    /// An empty result is reported as `NotFound`.
    pub fn get_livestock_by_name(&self, name: &str) -> AppResult<Vec<Livestock>> {
        log::debug!("Searching livestock by name {:?}", name);

        let matches: Vec<Livestock> = self
            .repo
            .list_all()?
            .into_iter()
            .filter(|livestock| livestock.name_matches(name))
            .collect();

        if matches.is_empty() {
            log::warn!("No livestock named {:?}", name);
            return Err(AppError::livestock_name_not_found(name));
        }

        Ok(matches)
    }

    pub fn list_all_livestock(&self) -> AppResult<Vec<Livestock>> {
        self.repo.list_all()
    }

    /// Replace all descriptive fields of an existing record.
    /// `id`, `owner` and `created_at` are preserved; `updated_at` is refreshed.
    pub fn update_livestock(&self, id: &str, payload: LivestockPayload) -> AppResult<Livestock> {
        self.check_payload(&payload)?;

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut livestock = self.repo.get_by_id(id)?.ok_or_else(|| {
            log::warn!("Cannot update livestock {}: not found", id);
            AppError::livestock_not_found(id)
        })?;

        livestock.apply_update(payload, self.clock.now());
        validate_livestock(&livestock)?;
        self.repo.save(&livestock)?;

        log::info!("Updated livestock {}", livestock.id);
        if let Some(updated_at) = livestock.updated_at {
            self.event_bus.emit(LivestockUpdated::new(livestock.id.clone(), updated_at));
        }

        Ok(livestock)
    }

    /// Remove a record permanently and return it as it was stored.
    ///
    /// The stored value is decoded before anything is removed, so a record
    /// that cannot be read back stays in the store.
    pub fn delete_livestock(&self, id: &str) -> AppResult<Livestock> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let livestock = self.repo.get_by_id(id)?.ok_or_else(|| {
            log::warn!("Cannot delete livestock {}: not found", id);
            AppError::livestock_not_found(id)
        })?;
        self.repo.remove(id)?;

        log::info!("Deleted livestock {}", livestock.id);
        self.event_bus.emit(LivestockDeleted::new(livestock.id.clone()));

        Ok(livestock)
    }

    fn check_payload(&self, payload: &LivestockPayload) -> AppResult<()> {
        validate_payload(payload, self.validation).map_err(|e| {
            log::warn!("Rejected livestock payload: {}", e);
            AppError::Domain(e)
        })
    }
}
