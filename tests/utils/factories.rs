/// Command factories using builder pattern
///
/// Defaults describe a valid owner / pet; tests override only what they exercise
use chrono::NaiveDate;
use petclinic_lib::modules::{
    owner::{RegisterOwnerCommand, UpdateOwnerCommand},
    pet::{RegisterPetCommand, UpdatePetCommand},
};

pub struct OwnerCommandFactory {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
}

impl Default for OwnerCommandFactory {
    fn default() -> Self {
        Self {
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            email: Some("john.doe@example.com".to_string()),
            phone: Some("+12345678901".to_string()),
            street: Some("123 Main St".to_string()),
            city: Some("Springfield".to_string()),
            state: Some("IL".to_string()),
            postal_code: Some("62701".to_string()),
        }
    }
}

impl OwnerCommandFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_name(mut self, first_name: &str) -> Self {
        self.first_name = Some(first_name.to_string());
        self
    }

    pub fn with_last_name(mut self, last_name: &str) -> Self {
        self.last_name = Some(last_name.to_string());
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    pub fn without_email(mut self) -> Self {
        self.email = None;
        self
    }

    pub fn build(self) -> RegisterOwnerCommand {
        RegisterOwnerCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            street: self.street,
            city: self.city,
            state: self.state,
            postal_code: self.postal_code,
        }
    }

    pub fn build_update(self, id: &str) -> UpdateOwnerCommand {
        UpdateOwnerCommand {
            id: Some(id.to_string()),
            details: self.build(),
        }
    }
}

pub struct PetCommandFactory {
    name: Option<String>,
    species: Option<String>,
    birth_date: Option<NaiveDate>,
    owner_id: Option<String>,
}

impl PetCommandFactory {
    pub fn for_owner(owner_id: &str) -> Self {
        Self {
            name: Some("Rex".to_string()),
            species: Some("Dog".to_string()),
            birth_date: NaiveDate::from_ymd_opt(2020, 5, 17),
            owner_id: Some(owner_id.to_string()),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_species(mut self, species: &str) -> Self {
        self.species = Some(species.to_string());
        self
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn build(self) -> RegisterPetCommand {
        RegisterPetCommand {
            name: self.name,
            species: self.species,
            birth_date: self.birth_date,
            owner_id: self.owner_id,
        }
    }

    pub fn build_update(self, id: &str) -> UpdatePetCommand {
        UpdatePetCommand {
            id: Some(id.to_string()),
            details: self.build(),
        }
    }
}
