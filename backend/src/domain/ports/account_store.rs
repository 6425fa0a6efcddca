//! Port for account persistence keyed by account number.
//!
//! The contract is a plain lookup/save pair. Adapters make no promise of
//! atomicity between a `find` and a later `save`.

use async_trait::async_trait;

use crate::domain::{Account, AccountNumber};

use super::define_port_error;

define_port_error! {
    /// Errors raised by account store adapters.
    pub enum AccountStoreError {
        /// Store connection could not be established.
        Connection { message: String } => "account store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "account store query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Fetch an account by number, `None` when absent.
    async fn find(&self, number: AccountNumber) -> Result<Option<Account>, AccountStoreError>;

    /// Persist an account, replacing any record with the same number.
    async fn save(&self, account: &Account) -> Result<(), AccountStoreError>;
}

/// Fixture store that never finds anything and discards writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountStore;

#[async_trait]
impl AccountStore for FixtureAccountStore {
    async fn find(&self, _number: AccountNumber) -> Result<Option<Account>, AccountStoreError> {
        Ok(None)
    }

    async fn save(&self, _account: &Account) -> Result<(), AccountStoreError> {
        Ok(())
    }
}
