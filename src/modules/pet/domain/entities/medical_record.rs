use chrono::{DateTime, Utc};

use crate::modules::pet::domain::value_objects::{MedicalRecordId, Treatment};
use crate::shared::domain::VeterinarianId;
use crate::shared::errors::AppResult;
use crate::shared::utils::{clock, Validator};

/// One visit in a pet's medical history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicalRecord {
    id: MedicalRecordId,
    date: DateTime<Utc>,
    description: String,
    veterinarian_id: VeterinarianId,
    treatments: Vec<Treatment>,
}

impl MedicalRecord {
    pub fn create(
        id: MedicalRecordId,
        date: DateTime<Utc>,
        description: &str,
        veterinarian_id: VeterinarianId,
    ) -> AppResult<Self> {
        let description = Validator::require_text("description", "Description", Some(description))?;
        Validator::validate_not_future_instant(
            "date",
            "Medical record date",
            date,
            clock::now(),
        )?;

        Ok(Self {
            id,
            date,
            description,
            veterinarian_id,
            treatments: Vec::new(),
        })
    }

    pub fn with_treatments(mut self, treatments: Vec<Treatment>) -> Self {
        self.treatments.extend(treatments);
        self
    }

    pub fn id(&self) -> &MedicalRecordId {
        &self.id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn veterinarian_id(&self) -> &VeterinarianId {
        &self.veterinarian_id
    }

    pub fn treatments(&self) -> &[Treatment] {
        &self.treatments
    }
}
