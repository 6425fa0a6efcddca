//! Account owner aggregate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Account, AccountType};

/// Validation errors raised when attaching accounts to an [`Owner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerValidationError {
    DuplicateAccountType { account_type: AccountType },
}

impl fmt::Display for OwnerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAccountType { account_type } => {
                write!(f, "owner already holds a {account_type} account")
            }
        }
    }
}

impl std::error::Error for OwnerValidationError {}

/// National identifier of an account owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(u64);

impl OwnerId {
    /// Wrap a raw owner identifier.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for OwnerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An individual or entity holding accounts.
///
/// ## Invariants
/// - At most one account of each [`AccountType`]. Currency is not part of the
///   key, so a foreign savings account blocks a local one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    id: OwnerId,
    accounts: Vec<Account>,
}

impl Owner {
    /// Create an owner with no accounts.
    pub fn new(id: OwnerId) -> Self {
        Self {
            id,
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> OwnerId {
        self.id
    }

    /// Accounts attached so far, in registration order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Return whether the owner already holds an account of `account_type`.
    pub fn holds_account_type(&self, account_type: AccountType) -> bool {
        self.accounts
            .iter()
            .any(|account| account.account_type == account_type)
    }

    /// Attach `account`, rejecting a second account of the same type.
    pub fn attach_account(&mut self, account: Account) -> Result<(), OwnerValidationError> {
        if self.holds_account_type(account.account_type) {
            return Err(OwnerValidationError::DuplicateAccountType {
                account_type: account.account_type,
            });
        }
        self.accounts.push(account);
        Ok(())
    }
}
