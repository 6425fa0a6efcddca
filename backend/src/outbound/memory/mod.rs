//! In-process adapters backed by `HashMap`s behind a mutex.
//!
//! State lives only as long as the process. These adapters back the default
//! server wiring and the integration tests.

mod account_store;
mod owner_registry;

pub use account_store::InMemoryAccountStore;
pub use owner_registry::InMemoryOwnerRegistry;
