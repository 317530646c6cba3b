//! Domain logic shared across the slotlink workspace.
//!
//! Pure, database-free code: the static app catalog and credential
//! resolver, the web3 feature-flag derivation, location label tables,
//! and the common error/type aliases.

pub mod apps;
pub mod error;
pub mod locations;
pub mod types;
pub mod web3;
