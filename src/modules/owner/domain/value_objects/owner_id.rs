crate::entity_id!(
    /// Identity of an owner aggregate
    OwnerId,
    "owner_id",
    "Owner ID"
);
