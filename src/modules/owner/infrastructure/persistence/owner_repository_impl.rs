use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::{log_debug, log_error, log_warn};
use crate::modules::owner::domain::{Owner, OwnerId, OwnerRepository};
use crate::modules::owner::infrastructure::models::OwnerRecord;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

const STORE: &str = "owners";

/// In-memory owner store keyed by id.
///
/// Saves replace the whole record; concurrent saves of the same id resolve as
/// last write wins. With `enforce_unique_email` set, an email may belong to
/// one owner id only. Email claims and releases happen while the owner's
/// entry is held, so saves of one id never interleave.
pub struct OwnerRepositoryImpl {
    owners: DashMap<String, OwnerRecord>,
    // email -> owner id, maintained only when uniqueness is enforced
    email_index: DashMap<String, String>,
    enforce_unique_email: bool,
}

impl OwnerRepositoryImpl {
    pub fn new(enforce_unique_email: bool) -> Self {
        Self {
            owners: DashMap::new(),
            email_index: DashMap::new(),
            enforce_unique_email,
        }
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    fn claim_email(&self, email: &str, owner_id: &str) -> AppResult<()> {
        match self.email_index.entry(email.to_string()) {
            Entry::Occupied(entry) if entry.get() != owner_id => {
                log_warn!(
                    "Rejected save of owner {}: email already belongs to owner {}",
                    owner_id,
                    entry.get()
                );
                Err(AppError::DatabaseError(format!(
                    "Owner with email '{}' already exists",
                    email
                )))
            }
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(entry) => {
                entry.insert(owner_id.to_string());
                Ok(())
            }
        }
    }
}

impl Default for OwnerRepositoryImpl {
    fn default() -> Self {
        Self::new(true)
    }
}

#[async_trait]
impl OwnerRepository for OwnerRepositoryImpl {
    async fn find_by_id(&self, id: &OwnerId) -> AppResult<Owner> {
        LogContext::repository_operation("find_by_id", STORE, id.value());

        let record = self
            .owners
            .get(id.value())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found_with_id("Owner", id.value()))?;
        record.to_domain().map_err(|err| {
            log_error!("Stored owner {} failed validation: {}", id, err);
            err
        })
    }

    async fn save(&self, owner: &Owner) -> AppResult<()> {
        let record = OwnerRecord::from_domain(owner);
        LogContext::repository_operation("save", STORE, &record.id);

        // Holds the owner's shard until the email index agrees with the record
        match self.owners.entry(record.id.clone()) {
            Entry::Occupied(mut entry) => {
                let previous_email = entry.get().email.clone();
                if self.enforce_unique_email {
                    self.claim_email(&record.email, &record.id)?;
                }
                let id = record.id.clone();
                let email = record.email.clone();
                entry.insert(record);

                if self.enforce_unique_email && previous_email != email {
                    self.email_index
                        .remove_if(&previous_email, |_, owner_id| owner_id == &id);
                    log_debug!("Released email of owner {} after change", id);
                }
            }
            Entry::Vacant(entry) => {
                if self.enforce_unique_email {
                    self.claim_email(&record.email, &record.id)?;
                }
                entry.insert(record);
            }
        }
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Owner>> {
        LogContext::repository_operation("find_by_email", STORE, email);

        let record = self
            .owners
            .iter()
            .find(|entry| entry.value().email == email)
            .map(|entry| entry.value().clone());

        record.map(|record| record.to_domain()).transpose()
    }
}
