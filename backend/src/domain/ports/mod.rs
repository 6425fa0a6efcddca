//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_query;
mod account_registration_command;
mod account_store;
mod owner_registry;

#[cfg(test)]
pub use account_query::MockAccountQuery;
pub use account_query::{AccountQuery, FixtureAccountQuery};
#[cfg(test)]
pub use account_registration_command::MockAccountRegistrationCommand;
pub use account_registration_command::{
    AccountRegistrationCommand, AccountRegistrationError, FixtureAccountRegistrationCommand,
};
#[cfg(test)]
pub use account_store::MockAccountStore;
pub use account_store::{AccountStore, AccountStoreError, FixtureAccountStore};
#[cfg(test)]
pub use owner_registry::MockOwnerRegistry;
pub use owner_registry::{FixtureOwnerRegistry, OwnerRegistry, OwnerRegistryError};
