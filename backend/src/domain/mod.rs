//! Domain primitives, services, and ports.
//!
//! Purpose: define the account registration workflow independently of any
//! transport or storage. Inbound adapters call the driving ports in
//! [`ports`]; outbound adapters implement the driven ports.
//!
//! Public surface:
//! - Account, AccountNumber, AccountType, Currency: the bank product model.
//! - Owner, OwnerId: account holders and their per-type uniqueness rule.
//! - is_supported: the product policy table.
//! - AccountRegistrationService: implements the registration and lookup ports.
//! - Error, ErrorCode: transport-agnostic error payload.

pub mod account;
pub mod account_policy;
pub mod account_registration_service;
pub mod error;
pub mod owner;
pub mod ports;

pub use self::account::{Account, AccountNumber, AccountType, Currency};
pub use self::account_policy::is_supported;
pub use self::account_registration_service::AccountRegistrationService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::owner::{Owner, OwnerId, OwnerValidationError};
