//! Account registration domain service.
//!
//! Implements the account driving ports on top of an [`AccountStore`] and an
//! [`OwnerRegistry`]. Registration runs four steps in order and stops at the
//! first failure: duplicate check, product policy, owner attachment, save.
//! Nothing is saved unless the first three steps succeed, but an owner
//! attachment is not rolled back if the save fails.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::account_policy;
use crate::domain::ports::{
    AccountQuery, AccountRegistrationCommand, AccountRegistrationError, AccountStore,
    AccountStoreError, OwnerRegistry,
};
use crate::domain::{Account, AccountNumber, AccountType, Currency, OwnerId};

/// Service validating and registering new accounts.
#[derive(Clone)]
pub struct AccountRegistrationService<S, O> {
    account_store: Arc<S>,
    owner_registry: Arc<O>,
}

impl<S, O> AccountRegistrationService<S, O> {
    /// Create a new service with the given collaborators.
    pub fn new(account_store: Arc<S>, owner_registry: Arc<O>) -> Self {
        Self {
            account_store,
            owner_registry,
        }
    }

    /// Return whether the bank offers `account_type` in `currency`.
    pub fn is_supported(account_type: AccountType, currency: Currency) -> bool {
        account_policy::is_supported(account_type, currency)
    }
}

impl<S, O> AccountRegistrationService<S, O>
where
    S: AccountStore,
    O: OwnerRegistry,
{
    async fn ensure_unregistered(&self, number: AccountNumber) -> Result<(), AccountRegistrationError> {
        if self.account_store.find(number).await?.is_some() {
            return Err(AccountRegistrationError::AccountAlreadyExists {
                account_number: number,
            });
        }
        Ok(())
    }

    fn ensure_supported(account: &Account) -> Result<(), AccountRegistrationError> {
        if Self::is_supported(account.account_type, account.currency) {
            return Ok(());
        }
        Err(AccountRegistrationError::UnsupportedAccountConfiguration {
            account_number: account.number,
            account_type: account.account_type,
            currency: account.currency,
        })
    }

    async fn register(
        &self,
        account: &Account,
        owner_id: OwnerId,
    ) -> Result<(), AccountRegistrationError> {
        self.ensure_unregistered(account.number).await?;
        Self::ensure_supported(account)?;
        self.owner_registry.add_account(account, owner_id).await?;
        self.account_store.save(account).await?;
        Ok(())
    }
}

#[async_trait]
impl<S, O> AccountRegistrationCommand for AccountRegistrationService<S, O>
where
    S: AccountStore,
    O: OwnerRegistry,
{
    async fn register_account(
        &self,
        account: Account,
        owner_id: OwnerId,
    ) -> Result<(), AccountRegistrationError> {
        debug!(
            account_number = %account.number,
            owner_id = %owner_id,
            account_type = %account.account_type,
            currency = %account.currency,
            "registering account"
        );

        match self.register(&account, owner_id).await {
            Ok(()) => {
                info!(account_number = %account.number, owner_id = %owner_id, "account registered");
                Ok(())
            }
            Err(error) => {
                warn!(
                    account_number = %account.number,
                    owner_id = %owner_id,
                    %error,
                    "account registration rejected"
                );
                Err(error)
            }
        }
    }
}

#[async_trait]
impl<S, O> AccountQuery for AccountRegistrationService<S, O>
where
    S: AccountStore,
    O: OwnerRegistry,
{
    async fn find_account(
        &self,
        number: AccountNumber,
    ) -> Result<Option<Account>, AccountStoreError> {
        self.account_store.find(number).await
    }
}

#[cfg(test)]
#[path = "account_registration_service_tests.rs"]
mod tests;
