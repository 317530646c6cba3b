//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use slotlink_api::config::ServerConfig;
use slotlink_api::router::build_app_router;
use slotlink_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue a GET request against the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builds"),
    )
    .await
    .expect("request succeeds")
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is valid JSON")
}

// ---------------------------------------------------------------------------
// Row fixtures
// ---------------------------------------------------------------------------

/// Insert a user, returning its id.
pub async fn seed_user(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, name, email) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind(format!("{username} host"))
    .bind(format!("{username}@example.com"))
    .fetch_one(pool)
    .await
    .expect("user inserts")
}

/// Insert an event type, returning its id. `user_id` may be `None` for
/// team-owned types.
pub async fn seed_event_type(pool: &PgPool, user_id: Option<i64>, slug: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO event_types (title, slug, length, user_id)
         VALUES ($1, $2, 30, $3) RETURNING id",
    )
    .bind(format!("{slug} meeting"))
    .bind(slug)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .expect("event type inserts")
}

/// Insert a hashed link, returning its id.
pub async fn seed_link(pool: &PgPool, event_type_id: i64, link: &str, expired: bool) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO hashed_links (link, event_type_id, expired)
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(link)
    .bind(event_type_id)
    .bind(expired)
    .fetch_one(pool)
    .await
    .expect("hashed link inserts")
}

/// Insert a credential with a raw JSON key payload, returning its id.
pub async fn seed_credential(
    pool: &PgPool,
    user_id: i64,
    app_type: &str,
    key: serde_json::Value,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO credentials (app_type, key, user_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(app_type)
    .bind(key)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .expect("credential inserts")
}

/// Insert a booking with attendees, returning the booking id.
pub async fn seed_booking(
    pool: &PgPool,
    uid: &str,
    user_id: i64,
    event_type_id: i64,
    description: Option<&str>,
    attendees: &[(&str, &str)],
) -> i64 {
    let booking_id: i64 = sqlx::query_scalar(
        "INSERT INTO bookings (uid, user_id, event_type_id, title, description, start_time, end_time)
         VALUES ($1, $2, $3, 'Booked meeting', $4, NOW(), NOW() + interval '30 minutes')
         RETURNING id",
    )
    .bind(uid)
    .bind(user_id)
    .bind(event_type_id)
    .bind(description)
    .fetch_one(pool)
    .await
    .expect("booking inserts");

    for (name, email) in attendees {
        sqlx::query("INSERT INTO attendees (booking_id, name, email, timezone) VALUES ($1, $2, $3, 'Europe/London')")
            .bind(booking_id)
            .bind(name)
            .bind(email)
            .execute(pool)
            .await
            .expect("attendee inserts");
    }

    booking_id
}
