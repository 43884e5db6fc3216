use serde::Serialize;

use crate::modules::owner::domain::{Address, Owner};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl From<&Address> for AddressDto {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street().to_string(),
            city: address.city().to_string(),
            state: address.state().to_string(),
            postal_code: address.postal_code().to_string(),
        }
    }
}

/// Flat projection of an owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: AddressDto,
    pub pet_ids: Vec<String>,
}

impl From<&Owner> for OwnerDto {
    fn from(owner: &Owner) -> Self {
        let contact = owner.contact_information();
        Self {
            id: owner.id().to_string(),
            first_name: owner.name().first_name().to_string(),
            last_name: owner.name().last_name().to_string(),
            email: contact.email().to_string(),
            phone: contact.phone().to_string(),
            address: AddressDto::from(contact.address()),
            pet_ids: owner.pets().iter().map(|id| id.to_string()).collect(),
        }
    }
}
