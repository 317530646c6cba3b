//! Disposable (hashed) booking link projection.

use sqlx::FromRow;
use slotlink_core::types::DbId;

/// A hashed link joined with its event type, as selected by
/// `HashedLinkRepo::find_by_link_and_slug`.
///
/// Only the fields the page loader branches on; the full event type is
/// fetched separately once the link has passed the expiry check.
#[derive(Debug, Clone, FromRow)]
pub struct DisposableLink {
    pub id: DbId,
    pub link: String,
    pub slug: String,
    pub expired: bool,
    pub event_type_id: DbId,
    /// Owner of the joined event type; `None` for team-owned types.
    pub event_type_user_id: Option<DbId>,
    pub timezone: Option<String>,
}

impl DisposableLink {
    /// Resolve the host user id from the link record or its event type.
    pub fn owner_user_id(&self) -> Option<DbId> {
        self.event_type_user_id
    }
}
