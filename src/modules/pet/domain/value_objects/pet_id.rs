crate::entity_id!(
    /// Identity of a pet aggregate
    PetId,
    "pet_id",
    "Pet ID"
);
