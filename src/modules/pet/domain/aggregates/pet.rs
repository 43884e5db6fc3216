use chrono::NaiveDate;

use crate::modules::owner::domain::value_objects::OwnerId;
use crate::modules::pet::domain::entities::MedicalRecord;
use crate::modules::pet::domain::value_objects::{PetId, PetName, Species};
use crate::shared::errors::AppResult;
use crate::shared::utils::{clock, Validator};

/// A pet, linked to its owner by id.
///
/// There are no field setters. An update is a new `Pet` built with the same
/// id and saved over the old one.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    id: PetId,
    name: PetName,
    species: Species,
    birth_date: NaiveDate,
    owner_id: OwnerId,
    medical_history: Vec<MedicalRecord>,
}

impl Pet {
    /// Fails with `InvalidTemporalValue` when `birth_date` is after today
    pub fn create(
        id: PetId,
        name: PetName,
        species: Species,
        birth_date: NaiveDate,
        owner_id: OwnerId,
    ) -> AppResult<Self> {
        Self::create_as_of(id, name, species, birth_date, owner_id, clock::today())
    }

    pub fn create_as_of(
        id: PetId,
        name: PetName,
        species: Species,
        birth_date: NaiveDate,
        owner_id: OwnerId,
        today: NaiveDate,
    ) -> AppResult<Self> {
        Validator::validate_not_future_date("birth_date", "Birth date", birth_date, today)?;

        Ok(Self {
            id,
            name,
            species,
            birth_date,
            owner_id,
            medical_history: Vec::new(),
        })
    }

    /// Attaches records in visit order, as read back from storage
    pub fn with_medical_history(mut self, records: Vec<MedicalRecord>) -> Self {
        self.medical_history.extend(records);
        self
    }

    /// Carries `previous`'s history onto a rebuilt pet. Records already
    /// present (same id) are not repeated.
    pub fn copy_medical_history_from(&mut self, previous: &Pet) {
        for record in previous.medical_history() {
            if !self.medical_history.iter().any(|r| r.id() == record.id()) {
                self.medical_history.push(record.clone());
            }
        }
    }

    pub fn id(&self) -> &PetId {
        &self.id
    }

    pub fn name(&self) -> &PetName {
        &self.name
    }

    pub fn species(&self) -> &Species {
        &self.species
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    pub fn medical_history(&self) -> &[MedicalRecord] {
        &self.medical_history
    }
}
