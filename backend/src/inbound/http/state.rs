//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountQuery, AccountRegistrationCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn AccountRegistrationCommand>,
    pub accounts: Arc<dyn AccountQuery>,
}

impl HttpState {
    /// Construct state from the account driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bank_accounts::domain::ports::{
    ///     FixtureAccountQuery, FixtureAccountRegistrationCommand,
    /// };
    /// use bank_accounts::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureAccountRegistrationCommand),
    ///     Arc::new(FixtureAccountQuery),
    /// );
    /// let _accounts = state.accounts.clone();
    /// ```
    pub fn new(
        registration: Arc<dyn AccountRegistrationCommand>,
        accounts: Arc<dyn AccountQuery>,
    ) -> Self {
        Self {
            registration,
            accounts,
        }
    }
}
