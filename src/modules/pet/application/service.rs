use std::sync::Arc;

use super::commands::{RegisterPetCommand, UpdatePetCommand};
use super::dto::PetDto;
use crate::modules::owner::domain::{OwnerId, OwnerRepository};
use crate::modules::pet::domain::{Pet, PetId, PetName, PetRepository, Species};
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

/// Use cases over the pet aggregate.
///
/// Registering a pet checks that its owner exists but leaves the owner's
/// pet list alone; `OwnerService::add_pet_reference` maintains that list.
pub struct PetService {
    pet_repo: Arc<dyn PetRepository>,
    owner_repo: Arc<dyn OwnerRepository>,
}

impl PetService {
    pub fn new(pet_repo: Arc<dyn PetRepository>, owner_repo: Arc<dyn OwnerRepository>) -> Self {
        Self {
            pet_repo,
            owner_repo,
        }
    }

    pub async fn register_pet(&self, command: &RegisterPetCommand) -> AppResult<PetDto> {
        command.validate()?;
        let owner_id = self.existing_owner(command.owner_id()).await?;

        let pet = build_pet(PetId::generate(), command, owner_id)?;
        self.pet_repo.save(&pet).await?;

        log_info!("Registered pet {} for owner {}", pet.id(), pet.owner_id());
        Ok(PetDto::from(&pet))
    }

    /// Replaces an existing pet's details and carries its medical history over.
    /// Unlike `save`, an unknown pet id fails with `NotFound` rather than inserting.
    pub async fn update_pet(&self, command: &UpdatePetCommand) -> AppResult<PetDto> {
        command.validate()?;
        let id = PetId::parse(command.id())?;
        let owner_id = self.existing_owner(command.details.owner_id()).await?;

        let existing = self.pet_repo.find_by_id(&id).await?;

        let mut replacement = build_pet(id, &command.details, owner_id)?;
        replacement.copy_medical_history_from(&existing);

        self.pet_repo.save(&replacement).await?;

        log_info!("Updated pet {}", replacement.id());
        Ok(PetDto::from(&replacement))
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<PetDto> {
        let id = Validator::require_text("pet_id", "Pet ID", Some(id))?;
        let id = PetId::parse(&id)?;
        log_debug!("Looking up pet {}", id);

        let pet = self.pet_repo.find_by_id(&id).await?;
        Ok(PetDto::from(&pet))
    }

    /// Empty when the owner has no pets; `NotFound` when the owner is unknown
    pub async fn find_by_owner(&self, owner_id: &str) -> AppResult<Vec<PetDto>> {
        let owner_id = self.existing_owner(owner_id).await?;

        let pets = self.pet_repo.find_by_owner(&owner_id).await?;
        log_debug!("Found {} pets for owner {}", pets.len(), owner_id);

        Ok(pets.iter().map(PetDto::from).collect())
    }

    /// Parses `raw` and confirms the owner is stored
    async fn existing_owner(&self, raw: &str) -> AppResult<OwnerId> {
        let raw = Validator::require_text("owner_id", "Owner ID", Some(raw))?;
        let owner_id = OwnerId::parse(&raw)?;
        self.owner_repo.find_by_id(&owner_id).await?;
        Ok(owner_id)
    }
}

fn build_pet(id: PetId, command: &RegisterPetCommand, owner_id: OwnerId) -> AppResult<Pet> {
    Pet::create(
        id,
        PetName::new(command.name())?,
        Species::new(command.species())?,
        command.birth_date()?,
        owner_id,
    )
}
