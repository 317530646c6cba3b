//! Disposable-link booking page loader.
//!
//! Resolves a `(link, slug)` pair to the props object the booking page
//! renders from, or to a structured not-found outcome. A linear sequence
//! of fetch-then-branch steps; any unresolved required entity
//! short-circuits to not-found, never a partial page.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use slotlink_core::locations::location_labels;
use slotlink_core::web3;
use slotlink_db::models::booking::RescheduleBooking;
use slotlink_db::models::event_type::EventTypePage;
use slotlink_db::models::user::UserProfile;
use slotlink_db::repositories::{
    BookingRepo, CredentialRepo, EventTypeRepo, HashedLinkRepo, UserRepo,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the booking page.
#[derive(Debug, Deserialize)]
pub struct LinkPageQuery {
    /// Uid of a prior booking being rescheduled.
    #[serde(rename = "rescheduleUid")]
    pub reschedule_uid: Option<String>,
}

/// The original `(slug, link)` pair, echoed back in the props.
#[derive(Debug, Serialize)]
pub struct DisposableBookingObject {
    pub slug: String,
    pub link: String,
}

/// Props object consumed by the rendering layer. Shape is the contract;
/// field names are camelCase on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPageProps {
    pub location_labels: BTreeMap<&'static str, &'static str>,
    pub profile: UserProfile,
    pub event_type: EventTypePage,
    pub booking: Option<RescheduleBooking>,
    /// Always null; populated client-side by the hosting framework.
    pub trpc_state: Option<serde_json::Value>,
    pub is_dynamic_group_booking: bool,
    pub is_disposable_booking_link: bool,
    pub disposable_booking_object: DisposableBookingObject,
}

/// Outcome of the page load: props, or a not-found the hosting
/// framework renders as a 404.
#[derive(Debug)]
pub enum PageOutcome {
    Props(Box<LinkPageProps>),
    NotFound,
}

impl IntoResponse for PageOutcome {
    fn into_response(self) -> Response {
        match self {
            PageOutcome::Props(props) => Json(*props).into_response(),
            PageOutcome::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "notFound": true }))).into_response()
            }
        }
    }
}

/// GET /d/{link}/{slug}
pub async fn get_link_page(
    State(state): State<AppState>,
    Path((link, slug)): Path<(String, String)>,
    Query(query): Query<LinkPageQuery>,
) -> AppResult<PageOutcome> {
    // Step 1: identifiers must be present. Axum guarantees the segments
    // exist; blank values are still a request-level fault.
    if link.trim().is_empty() || slug.trim().is_empty() {
        return Err(AppError::BadRequest(
            "link and slug must be non-empty".to_string(),
        ));
    }

    // Step 2-3: fetch the link record; absent or expired means 404
    // before any further fetch is issued.
    let Some(record) = HashedLinkRepo::find_by_link_and_slug(&state.pool, &link, &slug).await?
    else {
        return Ok(PageOutcome::NotFound);
    };
    if record.expired {
        tracing::debug!(link = %link, slug = %slug, "Disposable link is expired");
        return Ok(PageOutcome::NotFound);
    }

    // Step 4: resolve the host user id.
    let Some(user_id) = record.owner_user_id() else {
        return Ok(PageOutcome::NotFound);
    };

    // Steps 5 and 7: profile and credentials only depend on the user id,
    // so they are fetched concurrently.
    let (profile, credentials) = tokio::try_join!(
        UserRepo::find_profile_by_id(&state.pool, user_id),
        CredentialRepo::list_for_user(&state.pool, user_id),
    )?;
    let Some(profile) = profile else {
        return Ok(PageOutcome::NotFound);
    };

    // Step 6: the event type must still resolve.
    let Some(event_type) = EventTypeRepo::find_by_id(&state.pool, record.event_type_id).await?
    else {
        return Ok(PageOutcome::NotFound);
    };

    // Steps 7-8: derive the web3 flag and reshape date fields.
    let is_web3_active =
        web3::is_web3_active(credentials.iter().map(|c| (c.app_type.as_str(), &c.key)));
    let event_type = event_type.into_page_shape(is_web3_active);

    // Step 9: reschedule flows carry the prior booking.
    let booking = match query.reschedule_uid.as_deref() {
        Some(uid) => BookingRepo::find_reschedule_summary(&state.pool, uid).await?,
        None => None,
    };

    // Step 10: assemble the props.
    Ok(PageOutcome::Props(Box::new(LinkPageProps {
        location_labels: location_labels(),
        profile,
        event_type,
        booking,
        trpc_state: None,
        is_dynamic_group_booking: false,
        is_disposable_booking_link: true,
        disposable_booking_object: DisposableBookingObject { slug, link },
    })))
}
