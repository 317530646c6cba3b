//! Credential row model.

use sqlx::FromRow;
use slotlink_core::apps::CredentialSummary;
use slotlink_core::types::DbId;

/// Full credential row from the `credentials` table.
///
/// `key` holds provider secrets/config -- this struct deliberately does
/// not implement `Serialize`. Client-facing surfaces get
/// [`Credential::summary`] instead.
#[derive(Debug, Clone, FromRow)]
pub struct Credential {
    pub id: DbId,
    pub app_type: String,
    pub key: serde_json::Value,
    pub user_id: DbId,
}

impl Credential {
    /// Redacted `{id, type}` projection.
    pub fn summary(&self) -> CredentialSummary {
        CredentialSummary::new(self.id, self.app_type.clone())
    }
}
