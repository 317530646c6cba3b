//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod credential_repo;
pub mod event_type_repo;
pub mod hashed_link_repo;
pub mod user_repo;

pub use booking_repo::BookingRepo;
pub use credential_repo::CredentialRepo;
pub use event_type_repo::EventTypeRepo;
pub use hashed_link_repo::HashedLinkRepo;
pub use user_repo::UserRepo;
