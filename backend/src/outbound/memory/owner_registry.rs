//! In-memory [`OwnerRegistry`] adapter.
//!
//! Owner profiles are opened on first attachment; managing them otherwise is
//! left to the client directory this adapter stands in for.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{OwnerRegistry, OwnerRegistryError};
use crate::domain::{Account, Owner, OwnerId, OwnerValidationError};

/// Owner registry keeping profiles in a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryOwnerRegistry {
    owners: Mutex<HashMap<OwnerId, Owner>>,
}

impl InMemoryOwnerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of an owner's profile, if one has been opened.
    ///
    /// # Errors
    /// Returns [`OwnerRegistryError::Connection`] when the map lock is poisoned.
    pub fn owner(&self, owner_id: OwnerId) -> Result<Option<Owner>, OwnerRegistryError> {
        Ok(self.lock()?.get(&owner_id).cloned())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<OwnerId, Owner>>, OwnerRegistryError> {
        self.owners
            .lock()
            .map_err(|_| OwnerRegistryError::connection("owner map lock poisoned"))
    }
}

#[async_trait]
impl OwnerRegistry for InMemoryOwnerRegistry {
    async fn add_account(
        &self,
        account: &Account,
        owner_id: OwnerId,
    ) -> Result<(), OwnerRegistryError> {
        let mut owners = self.lock()?;
        let owner = owners
            .entry(owner_id)
            .or_insert_with(|| Owner::new(owner_id));

        owner
            .attach_account(account.clone())
            .map_err(|err| match err {
                OwnerValidationError::DuplicateAccountType { account_type } => {
                    OwnerRegistryError::owner_already_has_account_type(owner_id, account_type)
                }
            })
    }
}
