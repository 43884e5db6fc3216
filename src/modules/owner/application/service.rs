use std::sync::Arc;

use super::commands::{RegisterOwnerCommand, UpdateOwnerCommand};
use super::dto::OwnerDto;
use crate::modules::owner::domain::{
    Address, ContactInformation, FullName, Owner, OwnerId, OwnerRepository,
};
use crate::modules::pet::domain::value_objects::PetId;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

/// Use cases over the owner aggregate
pub struct OwnerService {
    owner_repo: Arc<dyn OwnerRepository>,
}

impl OwnerService {
    pub fn new(owner_repo: Arc<dyn OwnerRepository>) -> Self {
        Self { owner_repo }
    }

    /// Registers a new owner with no pets.
    ///
    /// Email uniqueness is not checked here; the store enforces it when
    /// configured to, and callers may look the email up first.
    pub async fn register_owner(&self, command: &RegisterOwnerCommand) -> AppResult<OwnerDto> {
        command.validate()?;

        let owner = Owner::create(
            OwnerId::generate(),
            full_name(command)?,
            contact_information(command)?,
        );
        self.owner_repo.save(&owner).await?;

        log_info!("Registered owner {}", owner.id());
        Ok(OwnerDto::from(&owner))
    }

    /// Replaces an owner's name and contact details, keeping its pet list
    pub async fn update_owner(&self, command: &UpdateOwnerCommand) -> AppResult<OwnerDto> {
        command.validate()?;
        let id = OwnerId::parse(command.id())?;

        let existing = self.owner_repo.find_by_id(&id).await?;

        let mut replacement = Owner::create(
            id,
            full_name(&command.details)?,
            contact_information(&command.details)?,
        );
        // Field edits never touch the pet relationship
        replacement.copy_pet_references_from(&existing)?;

        self.owner_repo.save(&replacement).await?;

        log_info!(
            "Updated owner {} ({} pet references kept)",
            replacement.id(),
            replacement.pets().len()
        );
        Ok(OwnerDto::from(&replacement))
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<OwnerDto> {
        let id = parse_owner_id(id)?;
        log_debug!("Looking up owner {}", id);

        let owner = self.owner_repo.find_by_id(&id).await?;
        Ok(OwnerDto::from(&owner))
    }

    /// Absence is a valid outcome here, not an error
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<OwnerDto>> {
        let email = Validator::require_text("email", "Email", Some(email))?.to_lowercase();
        log_debug!("Looking up owner by email {}", email);

        let owner = self.owner_repo.find_by_email(&email).await?;
        Ok(owner.as_ref().map(OwnerDto::from))
    }

    /// Records `pet_id` on the owner's pet list
    pub async fn add_pet_reference(&self, owner_id: &str, pet_id: &str) -> AppResult<OwnerDto> {
        let owner_id = parse_owner_id(owner_id)?;
        let pet_id = parse_pet_id(pet_id)?;

        let mut owner = self.owner_repo.find_by_id(&owner_id).await?;
        owner.add_pet(pet_id.clone())?;
        self.owner_repo.save(&owner).await?;

        log_info!("Linked pet {} to owner {}", pet_id, owner_id);
        Ok(OwnerDto::from(&owner))
    }

    /// Drops `pet_id` from the owner's pet list
    pub async fn remove_pet_reference(&self, owner_id: &str, pet_id: &str) -> AppResult<OwnerDto> {
        let owner_id = parse_owner_id(owner_id)?;
        let pet_id = parse_pet_id(pet_id)?;

        let mut owner = self.owner_repo.find_by_id(&owner_id).await?;
        owner.remove_pet(&pet_id)?;
        self.owner_repo.save(&owner).await?;

        log_info!("Unlinked pet {} from owner {}", pet_id, owner_id);
        Ok(OwnerDto::from(&owner))
    }
}

fn full_name(command: &RegisterOwnerCommand) -> AppResult<FullName> {
    FullName::new(command.first_name(), command.last_name())
}

fn contact_information(command: &RegisterOwnerCommand) -> AppResult<ContactInformation> {
    let address = Address::new(
        command.street(),
        command.city(),
        command.state(),
        command.postal_code(),
    )?;
    ContactInformation::new(command.email(), command.phone(), address)
}

fn parse_owner_id(raw: &str) -> AppResult<OwnerId> {
    let raw = Validator::require_text("owner_id", "Owner ID", Some(raw))?;
    OwnerId::parse(&raw)
}

fn parse_pet_id(raw: &str) -> AppResult<PetId> {
    let raw = Validator::require_text("pet_id", "Pet ID", Some(raw))?;
    PetId::parse(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::owner::domain::repositories::MockOwnerRepository;
    use crate::shared::errors::AppError;
    use mockall::predicate::eq;

    fn register_command() -> RegisterOwnerCommand {
        RegisterOwnerCommand {
            first_name: Some("John".into()),
            last_name: Some("Doe".into()),
            email: Some("  John.Doe@Example.com  ".into()),
            phone: Some("+12345678901".into()),
            street: Some("123 Main St".into()),
            city: Some("Springfield".into()),
            state: Some("IL".into()),
            postal_code: Some("62701".into()),
        }
    }

    fn stored_owner(id: &OwnerId) -> Owner {
        let address = Address::new("123 Main St", "Springfield", "IL", "62701").unwrap();
        Owner::create(
            id.clone(),
            FullName::new("John", "Doe").unwrap(),
            ContactInformation::new("john.doe@example.com", "+12345678901", address).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_register_normalizes_email_and_saves_once() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_save()
            .withf(|owner| owner.contact_information().email() == "john.doe@example.com")
            .times(1)
            .returning(|_| Ok(()));

        let service = OwnerService::new(Arc::new(repo));
        let dto = service.register_owner(&register_command()).await.unwrap();

        assert_eq!(dto.email, "john.doe@example.com");
        assert!(dto.pet_ids.is_empty());
        assert!(OwnerId::parse(&dto.id).is_ok());
    }

    #[tokio::test]
    async fn test_register_invalid_command_never_saves() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_save().never();

        let service = OwnerService::new(Arc::new(repo));
        let command = RegisterOwnerCommand {
            phone: Some("12-34".into()),
            ..register_command()
        };
        let err = service.register_owner(&command).await.unwrap_err();
        assert_eq!(err.field(), Some("phone"));
    }

    #[tokio::test]
    async fn test_update_keeps_pet_references() {
        let id = OwnerId::generate();
        let pet = PetId::generate();
        let mut existing = stored_owner(&id);
        existing.add_pet(pet.clone()).unwrap();

        let mut repo = MockOwnerRepository::new();
        repo.expect_find_by_id()
            .with(eq(id.clone()))
            .times(1)
            .returning(move |_| Ok(existing.clone()));
        let expected_pet = pet.clone();
        repo.expect_save()
            .withf(move |owner| owner.pets() == [expected_pet.clone()])
            .times(1)
            .returning(|_| Ok(()));

        let service = OwnerService::new(Arc::new(repo));
        let command = UpdateOwnerCommand {
            id: Some(id.to_string()),
            details: RegisterOwnerCommand {
                first_name: Some("Johnny".into()),
                ..register_command()
            },
        };
        let dto = service.update_owner(&command).await.unwrap();

        assert_eq!(dto.id, id.to_string());
        assert_eq!(dto.first_name, "Johnny");
        assert_eq!(dto.pet_ids, vec![pet.to_string()]);
    }

    #[tokio::test]
    async fn test_update_missing_owner_never_saves() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Err(AppError::not_found_with_id("Owner", id.value())));
        repo.expect_save().never();

        let service = OwnerService::new(Arc::new(repo));
        let command = UpdateOwnerCommand {
            id: Some(OwnerId::generate().to_string()),
            details: register_command(),
        };
        let err = service.update_owner(&command).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_find_by_id_rejects_blank_and_malformed() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_find_by_id().never();
        let service = OwnerService::new(Arc::new(repo));

        let err = service.find_by_id("   ").await.unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT");

        let err = service.find_by_id("invalid-uuid").await.unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_find_by_id_trims_input() {
        let id = OwnerId::generate();
        let owner = stored_owner(&id);

        let mut repo = MockOwnerRepository::new();
        repo.expect_find_by_id()
            .with(eq(id.clone()))
            .returning(move |_| Ok(owner.clone()));

        let service = OwnerService::new(Arc::new(repo));
        let dto = service.find_by_id(&format!("  {}  ", id)).await.unwrap();
        assert_eq!(dto.id, id.to_string());
    }

    #[tokio::test]
    async fn test_find_by_email_normalizes_and_allows_absence() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "nobody@example.com")
            .times(1)
            .returning(|_| Ok(None));

        let service = OwnerService::new(Arc::new(repo));
        let found = service.find_by_email(" Nobody@Example.COM ").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_email_rejects_blank() {
        let mut repo = MockOwnerRepository::new();
        repo.expect_find_by_email().never();

        let service = OwnerService::new(Arc::new(repo));
        let err = service.find_by_email("").await.unwrap_err();
        assert_eq!(err.field(), Some("email"));
    }

    #[tokio::test]
    async fn test_pet_reference_round_trip() {
        let id = OwnerId::generate();
        let pet = PetId::generate();
        let mut with_pet = stored_owner(&id);
        with_pet.add_pet(pet.clone()).unwrap();

        let mut repo = MockOwnerRepository::new();
        let mut seq = mockall::Sequence::new();
        let empty = stored_owner(&id);
        repo.expect_find_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(empty.clone()));
        repo.expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        repo.expect_find_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(with_pet.clone()));
        repo.expect_save()
            .withf(|owner| owner.pets().is_empty())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let service = OwnerService::new(Arc::new(repo));
        let added = service
            .add_pet_reference(id.value(), pet.value())
            .await
            .unwrap();
        assert_eq!(added.pet_ids, vec![pet.to_string()]);

        let removed = service
            .remove_pet_reference(id.value(), pet.value())
            .await
            .unwrap();
        assert!(removed.pet_ids.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_pet_reference_is_not_saved() {
        let id = OwnerId::generate();
        let pet = PetId::generate();
        let mut existing = stored_owner(&id);
        existing.add_pet(pet.clone()).unwrap();

        let mut repo = MockOwnerRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(existing.clone()));
        repo.expect_save().never();

        let service = OwnerService::new(Arc::new(repo));
        let err = service
            .add_pet_reference(id.value(), pet.value())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "DUPLICATE_RELATIONSHIP");
    }
}
