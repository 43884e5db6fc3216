use chrono::NaiveDate;
use serde::Serialize;

use crate::modules::pet::domain::Pet;

/// Flat projection of a pet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDto {
    pub id: String,
    pub name: String,
    pub species: String,
    pub birth_date: NaiveDate,
    pub owner_id: String,
}

impl From<&Pet> for PetDto {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id().to_string(),
            name: pet.name().value().to_string(),
            species: pet.species().name().to_string(),
            birth_date: pet.birth_date(),
            owner_id: pet.owner_id().to_string(),
        }
    }
}
