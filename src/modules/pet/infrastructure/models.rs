use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::owner::domain::OwnerId;
use crate::modules::pet::domain::{
    MedicalRecord, MedicalRecordId, Pet, PetId, PetName, Species, Treatment,
};
use crate::shared::domain::VeterinarianId;
use crate::shared::errors::AppResult;

// ============= PET RECORDS =============

/// Stored shape of a pet, history included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRecord {
    pub id: String,
    pub name: String,
    pub species: String,
    pub birth_date: NaiveDate,
    pub owner_id: String,
    pub medical_history: Vec<MedicalRecordRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub veterinarian_id: String,
    pub treatments: Vec<TreatmentRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentRecord {
    pub description: String,
    pub administered_at: DateTime<Utc>,
}

impl PetRecord {
    pub fn from_domain(pet: &Pet) -> Self {
        Self {
            id: pet.id().to_string(),
            name: pet.name().value().to_string(),
            species: pet.species().name().to_string(),
            birth_date: pet.birth_date(),
            owner_id: pet.owner_id().to_string(),
            medical_history: pet
                .medical_history()
                .iter()
                .map(MedicalRecordRecord::from_domain)
                .collect(),
        }
    }

    /// Rebuilds through the domain constructors, so stored data is re-validated
    pub fn to_domain(&self) -> AppResult<Pet> {
        let history = self
            .medical_history
            .iter()
            .map(MedicalRecordRecord::to_domain)
            .collect::<AppResult<Vec<_>>>()?;

        let pet = Pet::create(
            PetId::parse(&self.id)?,
            PetName::new(&self.name)?,
            Species::new(&self.species)?,
            self.birth_date,
            OwnerId::parse(&self.owner_id)?,
        )?;
        Ok(pet.with_medical_history(history))
    }
}

impl MedicalRecordRecord {
    pub fn from_domain(record: &MedicalRecord) -> Self {
        Self {
            id: record.id().to_string(),
            date: record.date(),
            description: record.description().to_string(),
            veterinarian_id: record.veterinarian_id().to_string(),
            treatments: record
                .treatments()
                .iter()
                .map(TreatmentRecord::from_domain)
                .collect(),
        }
    }

    pub fn to_domain(&self) -> AppResult<MedicalRecord> {
        let treatments = self
            .treatments
            .iter()
            .map(TreatmentRecord::to_domain)
            .collect::<AppResult<Vec<_>>>()?;

        let record = MedicalRecord::create(
            MedicalRecordId::parse(&self.id)?,
            self.date,
            &self.description,
            VeterinarianId::parse(&self.veterinarian_id)?,
        )?;
        Ok(record.with_treatments(treatments))
    }
}

impl TreatmentRecord {
    pub fn from_domain(treatment: &Treatment) -> Self {
        Self {
            description: treatment.description().to_string(),
            administered_at: treatment.administered_at(),
        }
    }

    pub fn to_domain(&self) -> AppResult<Treatment> {
        Treatment::new(&self.description, self.administered_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record() -> PetRecord {
        let visit = Utc::now() - Duration::days(30);
        PetRecord {
            id: PetId::generate().to_string(),
            name: "Rex".into(),
            species: "Dog".into(),
            birth_date: NaiveDate::from_ymd_opt(2019, 8, 1).unwrap(),
            owner_id: OwnerId::generate().to_string(),
            medical_history: vec![MedicalRecordRecord {
                id: MedicalRecordId::generate().to_string(),
                date: visit,
                description: "Annual checkup".into(),
                veterinarian_id: VeterinarianId::generate().to_string(),
                treatments: vec![TreatmentRecord {
                    description: "Rabies vaccine".into(),
                    administered_at: visit,
                }],
            }],
        }
    }

    #[test]
    fn test_rehydrates_history() {
        let stored = record();
        let pet = stored.to_domain().unwrap();

        assert_eq!(pet.medical_history().len(), 1);
        assert_eq!(
            pet.medical_history()[0].treatments()[0].description(),
            "Rabies vaccine"
        );
        assert_eq!(PetRecord::from_domain(&pet), stored);
    }

    #[test]
    fn test_rehydration_revalidates() {
        let too_long = PetRecord {
            name: "x".repeat(51),
            ..record()
        };
        assert_eq!(too_long.to_domain().unwrap_err().field(), Some("name"));

        let mut bad_vet = record();
        bad_vet.medical_history[0].veterinarian_id = "vet-1".into();
        assert_eq!(
            bad_vet.to_domain().unwrap_err().field(),
            Some("veterinarian_id")
        );
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(record()).unwrap();
        assert!(json["birthDate"].is_string());
        assert!(json["medicalHistory"][0]["treatments"][0]["administeredAt"].is_string());
    }
}
