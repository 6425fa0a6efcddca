//! Which bank products may be opened.
//!
//! The policy is default-allow: every (type, currency) pair is accepted unless
//! listed in [`EXCLUDED_PRODUCTS`].

use crate::domain::{AccountType, Currency};

/// Product combinations the bank does not offer.
pub const EXCLUDED_PRODUCTS: &[(AccountType, Currency)] =
    &[(AccountType::Checking, Currency::Foreign)];

/// Return whether the bank offers `account_type` in `currency`.
///
/// # Examples
/// ```
/// use bank_accounts::domain::{AccountType, Currency, is_supported};
///
/// assert!(is_supported(AccountType::Savings, Currency::Foreign));
/// assert!(!is_supported(AccountType::Checking, Currency::Foreign));
/// ```
pub fn is_supported(account_type: AccountType, currency: Currency) -> bool {
    !EXCLUDED_PRODUCTS.contains(&(account_type, currency))
}
