//! Bank account data model.
//!
//! An [`Account`] is built by the caller fully populated and becomes immutable
//! once registered. Ownership is not stored on the account; owners track their
//! accounts through [`crate::domain::Owner`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-assigned account number used as the store key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(u64);

impl AccountNumber {
    /// Wrap a raw account number.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for AccountNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bank product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Current account used for day-to-day payments.
    Checking,
    /// Interest-bearing savings account.
    Savings,
}

impl AccountType {
    /// Stable lowercase label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Currency an account is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    /// The bank's domestic currency.
    Local,
    /// Any foreign currency offered by the bank.
    Foreign,
}

impl Currency {
    /// Stable lowercase label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Foreign => "foreign",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bank product instance.
///
/// Not serialisable; the HTTP adapter owns the wire shape through
/// `AccountResponse`.
///
/// # Examples
/// ```
/// use bank_accounts::domain::{Account, AccountNumber, AccountType, Currency};
///
/// let account = Account::new(
///     AccountNumber::new(123_456_789),
///     AccountType::Checking,
///     Currency::Local,
///     10_000,
/// );
/// assert_eq!(account.number.get(), 123_456_789);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique account number.
    pub number: AccountNumber,
    /// Opening balance in minor currency units.
    pub balance: i64,
    /// Product category.
    pub account_type: AccountType,
    /// Denomination currency.
    pub currency: Currency,
}

impl Account {
    /// Build a fully populated account.
    pub fn new(
        number: AccountNumber,
        account_type: AccountType,
        currency: Currency,
        balance: i64,
    ) -> Self {
        Self {
            number,
            balance,
            account_type,
            currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(AccountType::Checking, "checking")]
    #[case(AccountType::Savings, "savings")]
    fn account_type_serialises_as_snake_case(#[case] value: AccountType, #[case] label: &str) {
        assert_eq!(serde_json::to_value(value).expect("serialise"), json!(label));
        assert_eq!(value.to_string(), label);
    }

    #[rstest]
    fn unknown_currency_is_rejected() {
        let result = serde_json::from_value::<Currency>(json!("bitcoin"));
        assert!(result.is_err());
    }
}
