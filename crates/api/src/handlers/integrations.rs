//! Handlers for the `/integrations` resource.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use slotlink_core::apps::{self, AppWithCredentials, CredentialSummary};
use slotlink_core::types::DbId;
use slotlink_db::repositories::CredentialRepo;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IntegrationsQuery {
    #[serde(rename = "userId")]
    pub user_id: DbId,
}

/// One catalog entry with the user's matching credentials.
///
/// `credential` is the compat alias for the first list element.
#[derive(Debug, Serialize)]
pub struct IntegrationEntry {
    #[serde(flatten)]
    pub app: AppWithCredentials,
    pub credential: Option<CredentialSummary>,
}

/// GET /api/v1/integrations?userId={id}
///
/// Resolves the app catalog against the user's stored credentials.
/// Credentials are redacted to `{id, type}`; key payloads never leave
/// the server.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<IntegrationsQuery>,
) -> AppResult<Json<Vec<IntegrationEntry>>> {
    let credentials = CredentialRepo::list_for_user(&state.pool, query.user_id).await?;
    let summaries: Vec<_> = credentials.iter().map(|c| c.summary()).collect();

    let entries = apps::resolve_for_user(&summaries)
        .into_iter()
        .map(|app| IntegrationEntry {
            credential: app.credential().cloned(),
            app,
        })
        .collect();

    Ok(Json(entries))
}
