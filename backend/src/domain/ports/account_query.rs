//! Driving port for reading registered accounts.

use async_trait::async_trait;

use crate::domain::{Account, AccountNumber};

use super::AccountStoreError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountQuery: Send + Sync {
    /// Look up an account by number, `None` when it was never registered.
    async fn find_account(&self, number: AccountNumber)
    -> Result<Option<Account>, AccountStoreError>;
}

/// Fixture query that knows no accounts.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountQuery;

#[async_trait]
impl AccountQuery for FixtureAccountQuery {
    async fn find_account(
        &self,
        _number: AccountNumber,
    ) -> Result<Option<Account>, AccountStoreError> {
        Ok(None)
    }
}
