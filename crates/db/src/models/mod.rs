//! Row models and transport projections.
//!
//! Each submodule contains a `FromRow` struct matching the queried row
//! and, where the row reaches a client-facing surface, a `Serialize`
//! projection stripped of server-only fields.

pub mod booking;
pub mod credential;
pub mod event_type;
pub mod hashed_link;
pub mod user;
