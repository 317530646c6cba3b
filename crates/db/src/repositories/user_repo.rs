//! Repository for the `users` table.

use sqlx::PgPool;
use slotlink_core::types::DbId;

use crate::models::user::UserProfile;

/// Column list shared across queries to avoid repetition.
const PROFILE_COLUMNS: &str = "id, username, name, email, bio, avatar_url, theme, \
                               brand_color, dark_brand_color, timezone, away";

/// Read access to host-user profiles.
pub struct UserRepo;

impl UserRepo {
    /// Fetch the profile projection for a user id.
    pub async fn find_profile_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
