use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::modules::owner::domain::OwnerId;
use crate::modules::pet::domain::{Pet, PetId, PetRepository};
use crate::modules::pet::infrastructure::models::PetRecord;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

const STORE: &str = "pets";

#[derive(Debug, Clone)]
struct StoredPet {
    // Position of the first save; replacing a pet keeps it
    sequence: u64,
    record: PetRecord,
}

/// In-memory pet store keyed by id. Last write wins on the same id.
pub struct PetRepositoryImpl {
    pets: DashMap<String, StoredPet>,
    next_sequence: AtomicU64,
}

impl PetRepositoryImpl {
    pub fn new() -> Self {
        Self {
            pets: DashMap::new(),
            next_sequence: AtomicU64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

impl Default for PetRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PetRepository for PetRepositoryImpl {
    async fn find_by_id(&self, id: &PetId) -> AppResult<Pet> {
        LogContext::repository_operation("find_by_id", STORE, id.value());

        let record = self
            .pets
            .get(id.value())
            .map(|entry| entry.record.clone())
            .ok_or_else(|| AppError::not_found_with_id("Pet", id.value()))?;
        record.to_domain()
    }

    async fn save(&self, pet: &Pet) -> AppResult<()> {
        let record = PetRecord::from_domain(pet);
        LogContext::repository_operation("save", STORE, &record.id);

        match self.pets.entry(record.id.clone()) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().record = record;
            }
            Entry::Vacant(entry) => {
                let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
                entry.insert(StoredPet { sequence, record });
            }
        }
        Ok(())
    }

    async fn find_by_owner(&self, owner_id: &OwnerId) -> AppResult<Vec<Pet>> {
        LogContext::repository_operation("find_by_owner", STORE, owner_id.value());

        let mut matches: Vec<StoredPet> = self
            .pets
            .iter()
            .filter(|entry| entry.record.owner_id == owner_id.value())
            .map(|entry| entry.value().clone())
            .collect();
        matches.sort_by_key(|stored| stored.sequence);

        matches
            .iter()
            .map(|stored| stored.record.to_domain())
            .collect()
    }
}
