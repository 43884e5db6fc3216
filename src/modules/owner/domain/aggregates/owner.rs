use crate::modules::owner::domain::value_objects::{ContactInformation, FullName, OwnerId};
use crate::modules::pet::domain::value_objects::PetId;
use crate::shared::errors::{AppError, AppResult};

/// A pet owner and the set of pets they own.
///
/// Pets are held by id only; the list keeps insertion order and never
/// contains the same id twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    id: OwnerId,
    name: FullName,
    contact_information: ContactInformation,
    pet_ids: Vec<PetId>,
}

impl Owner {
    /// New owner with no pets
    pub fn create(id: OwnerId, name: FullName, contact_information: ContactInformation) -> Self {
        Self {
            id,
            name,
            contact_information,
            pet_ids: Vec::new(),
        }
    }

    pub fn add_pet(&mut self, pet_id: PetId) -> AppResult<()> {
        if self.has_pet(&pet_id) {
            return Err(AppError::DuplicateRelationship(
                "Pet is already owned by this owner".to_string(),
            ));
        }
        self.pet_ids.push(pet_id);
        Ok(())
    }

    pub fn remove_pet(&mut self, pet_id: &PetId) -> AppResult<()> {
        let before = self.pet_ids.len();
        self.pet_ids.retain(|id| id != pet_id);

        if self.pet_ids.len() == before {
            return Err(AppError::RelationshipNotFound(
                "Pet is not owned by this owner".to_string(),
            ));
        }
        Ok(())
    }

    /// Adds every pet `other` holds, in its order. Fails on the first id
    /// already present here.
    pub fn copy_pet_references_from(&mut self, other: &Owner) -> AppResult<()> {
        for pet_id in other.pets() {
            self.add_pet(pet_id.clone())?;
        }
        Ok(())
    }

    pub fn has_pet(&self, pet_id: &PetId) -> bool {
        self.pet_ids.contains(pet_id)
    }

    pub fn id(&self) -> &OwnerId {
        &self.id
    }

    pub fn name(&self) -> &FullName {
        &self.name
    }

    pub fn contact_information(&self) -> &ContactInformation {
        &self.contact_information
    }

    /// Read-only view; mutate through `add_pet`/`remove_pet`
    pub fn pets(&self) -> &[PetId] {
        &self.pet_ids
    }
}
