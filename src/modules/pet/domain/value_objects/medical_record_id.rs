crate::entity_id!(
    /// Identity of a medical record within a pet's history
    MedicalRecordId,
    "medical_record_id",
    "Medical record ID"
);
