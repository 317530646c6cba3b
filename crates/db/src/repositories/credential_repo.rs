//! Repository for the `credentials` table.

use sqlx::PgPool;
use slotlink_core::types::DbId;

use crate::models::credential::Credential;

/// Read access to stored credentials. Rows carry secret key payloads and
/// must be redacted via [`Credential::summary`] before leaving the server.
pub struct CredentialRepo;

impl CredentialRepo {
    /// All credentials for one user.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Credential>, sqlx::Error> {
        sqlx::query_as::<_, Credential>(
            "SELECT id, app_type, key, user_id FROM credentials WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
