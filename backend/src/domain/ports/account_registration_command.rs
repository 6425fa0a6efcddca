//! Driving port for registering new accounts.
//!
//! Inbound adapters call [`AccountRegistrationCommand`] with a fully populated
//! [`Account`] and the owner it should be attached to.

use async_trait::async_trait;

use crate::domain::{Account, AccountNumber, AccountType, Currency, OwnerId};

use super::{AccountStoreError, OwnerRegistryError};

/// Reasons an account registration is refused.
///
/// Collaborator failures are wrapped transparently so callers can match on the
/// exact error the store or registry raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountRegistrationError {
    /// An account with this number is already registered.
    #[error("account {account_number} already exists")]
    AccountAlreadyExists { account_number: AccountNumber },
    /// The bank does not offer this product in this currency.
    #[error("account {account_number} is not supported: {account_type} accounts are not offered in {currency} currency")]
    UnsupportedAccountConfiguration {
        account_number: AccountNumber,
        account_type: AccountType,
        currency: Currency,
    },
    #[error(transparent)]
    Owner(#[from] OwnerRegistryError),
    #[error(transparent)]
    Store(#[from] AccountStoreError),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRegistrationCommand: Send + Sync {
    /// Validate `account` and register it under `owner_id`.
    ///
    /// # Errors
    ///
    /// Fails on a duplicate number, an unsupported type/currency pair, an
    /// owner that already holds the account type, or a store failure.
    async fn register_account(
        &self,
        account: Account,
        owner_id: OwnerId,
    ) -> Result<(), AccountRegistrationError>;
}

/// Fixture command that accepts every registration without persisting it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountRegistrationCommand;

#[async_trait]
impl AccountRegistrationCommand for FixtureAccountRegistrationCommand {
    async fn register_account(
        &self,
        _account: Account,
        _owner_id: OwnerId,
    ) -> Result<(), AccountRegistrationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn already_exists_message_names_the_account() {
        let err = AccountRegistrationError::AccountAlreadyExists {
            account_number: AccountNumber::new(123_456_789),
        };
        assert_eq!(err.to_string(), "account 123456789 already exists");
    }

    #[rstest]
    fn unsupported_message_names_the_product() {
        let err = AccountRegistrationError::UnsupportedAccountConfiguration {
            account_number: AccountNumber::new(1),
            account_type: AccountType::Checking,
            currency: Currency::Foreign,
        };
        assert_eq!(
            err.to_string(),
            "account 1 is not supported: checking accounts are not offered in foreign currency"
        );
    }

    #[rstest]
    fn collaborator_errors_are_transparent() {
        let inner = OwnerRegistryError::owner_already_has_account_type(9_u64, AccountType::Savings);
        let err = AccountRegistrationError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err, AccountRegistrationError::Owner(inner));
    }
}
