//! Port for attaching accounts to owner profiles.

use async_trait::async_trait;

use crate::domain::{Account, AccountType, OwnerId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by owner registry adapters.
    pub enum OwnerRegistryError {
        /// The owner already holds an account of this product type.
        OwnerAlreadyHasAccountType { owner_id: OwnerId, account_type: AccountType } =>
            "owner {owner_id} already has a {account_type} account",
        /// Registry connection could not be established.
        Connection { message: String } => "owner registry connection failed: {message}",
    }
}

/// Driven port that owns the "one account per type per owner" rule.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRegistry: Send + Sync {
    /// Attach `account` to the profile of `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`OwnerRegistryError::OwnerAlreadyHasAccountType`] when the
    /// owner already holds an account of the same type.
    async fn add_account(
        &self,
        account: &Account,
        owner_id: OwnerId,
    ) -> Result<(), OwnerRegistryError>;
}

/// Fixture registry that accepts every attachment.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureOwnerRegistry;

#[async_trait]
impl OwnerRegistry for FixtureOwnerRegistry {
    async fn add_account(
        &self,
        _account: &Account,
        _owner_id: OwnerId,
    ) -> Result<(), OwnerRegistryError> {
        Ok(())
    }
}
