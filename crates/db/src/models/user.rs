//! Host-user profile projection.

use serde::Serialize;
use sqlx::FromRow;
use slotlink_core::types::DbId;

/// Profile subset of a `users` row shipped to the booking page.
///
/// This is a projection, not the full row; anything secret-adjacent
/// stays out of the select list entirely.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: DbId,
    pub username: String,
    pub name: Option<String>,
    pub email: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub theme: Option<String>,
    pub brand_color: String,
    pub dark_brand_color: String,
    pub timezone: String,
    pub away: bool,
}
