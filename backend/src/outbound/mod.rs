//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: process-local account store and owner registry
//!
//! Adapters are thin translators between domain types and storage. The only
//! rule they enforce is the one a port delegates to them, such as the owner
//! registry's one-account-per-type check.

pub mod memory;
