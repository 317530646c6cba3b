//! Route definitions for the `/integrations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::integrations;
use crate::state::AppState;

/// Routes mounted at `/integrations`.
///
/// ```text
/// GET / -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(integrations::list))
}
