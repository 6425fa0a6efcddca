//! In-memory [`AccountStore`] adapter.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{AccountStore, AccountStoreError};
use crate::domain::{Account, AccountNumber};

/// Account store keeping records in a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: Mutex<HashMap<AccountNumber, Account>>,
}

impl InMemoryAccountStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    ///
    /// # Errors
    /// Returns [`AccountStoreError::Query`] when the map lock is poisoned.
    pub fn len(&self) -> Result<usize, AccountStoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, AccountStoreError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<AccountNumber, Account>>, AccountStoreError> {
        self.accounts
            .lock()
            .map_err(|_| AccountStoreError::query("account map lock poisoned"))
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find(&self, number: AccountNumber) -> Result<Option<Account>, AccountStoreError> {
        Ok(self.lock()?.get(&number).cloned())
    }

    async fn save(&self, account: &Account) -> Result<(), AccountStoreError> {
        self.lock()?.insert(account.number, account.clone());
        Ok(())
    }
}
