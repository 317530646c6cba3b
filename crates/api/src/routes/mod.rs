pub mod health;
pub mod integrations;
pub mod link_page;

use axum::Router;

use crate::state::AppState;

/// Feature routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/integrations", integrations::router())
}
