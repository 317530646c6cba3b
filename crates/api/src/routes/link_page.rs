//! Route definitions for disposable booking link pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::link_page;
use crate::state::AppState;

/// Routes mounted at the application root (page URLs, not `/api/v1`).
///
/// ```text
/// GET /d/{link}/{slug} -> get_link_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/d/{link}/{slug}", get(link_page::get_link_page))
}
