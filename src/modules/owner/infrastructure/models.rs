use serde::{Deserialize, Serialize};

use crate::modules::owner::domain::{Address, ContactInformation, FullName, Owner, OwnerId};
use crate::modules::pet::domain::value_objects::PetId;
use crate::shared::errors::AppResult;

// ============= OWNER RECORD =============

/// Stored shape of an owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub pet_ids: Vec<String>,
}

impl OwnerRecord {
    pub fn from_domain(owner: &Owner) -> Self {
        let contact = owner.contact_information();
        let address = contact.address();
        Self {
            id: owner.id().to_string(),
            first_name: owner.name().first_name().to_string(),
            last_name: owner.name().last_name().to_string(),
            email: contact.email().to_string(),
            phone: contact.phone().to_string(),
            street: address.street().to_string(),
            city: address.city().to_string(),
            state: address.state().to_string(),
            postal_code: address.postal_code().to_string(),
            pet_ids: owner.pets().iter().map(|id| id.to_string()).collect(),
        }
    }

    /// Rebuilds through the domain constructors, so stored data is re-validated
    pub fn to_domain(&self) -> AppResult<Owner> {
        let address = Address::new(&self.street, &self.city, &self.state, &self.postal_code)?;
        let mut owner = Owner::create(
            OwnerId::parse(&self.id)?,
            FullName::new(&self.first_name, &self.last_name)?,
            ContactInformation::new(&self.email, &self.phone, address)?,
        );
        for pet_id in &self.pet_ids {
            owner.add_pet(PetId::parse(pet_id)?)?;
        }
        Ok(owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;

    fn record() -> OwnerRecord {
        OwnerRecord {
            id: OwnerId::generate().to_string(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
            phone: "+12345678901".into(),
            street: "123 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            postal_code: "62701".into(),
            pet_ids: vec![PetId::generate().to_string(), PetId::generate().to_string()],
        }
    }

    #[test]
    fn test_rehydrates_and_maps_back() {
        let stored = record();
        let owner = stored.to_domain().unwrap();
        assert_eq!(owner.pets().len(), 2);
        assert_eq!(OwnerRecord::from_domain(&owner), stored);
    }

    #[test]
    fn test_rehydration_revalidates() {
        let bad_email = OwnerRecord {
            email: "not-an-email".into(),
            ..record()
        };
        assert_eq!(bad_email.to_domain().unwrap_err().field(), Some("email"));

        let duplicate = PetId::generate().to_string();
        let duplicate_pets = OwnerRecord {
            pet_ids: vec![duplicate.clone(), duplicate],
            ..record()
        };
        assert!(matches!(
            duplicate_pets.to_domain().unwrap_err(),
            AppError::DuplicateRelationship(_)
        ));
    }
}
