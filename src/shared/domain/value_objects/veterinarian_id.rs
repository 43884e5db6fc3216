crate::entity_id!(
    /// Identity of a veterinarian; referenced by medical records
    VeterinarianId,
    "veterinarian_id",
    "Veterinarian ID"
);
