//! Event type row model and page projection.

use serde::Serialize;
use sqlx::FromRow;
use slotlink_core::types::{DbId, Timestamp};

/// Full event type row from the `event_types` table.
#[derive(Debug, Clone, FromRow)]
pub struct EventType {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub length: i32,
    pub hidden: bool,
    pub user_id: Option<DbId>,
    pub locations: Option<serde_json::Value>,
    pub timezone: Option<String>,
    pub period_type: String,
    pub period_start_date: Option<Timestamp>,
    pub period_end_date: Option<Timestamp>,
    pub period_days: Option<i32>,
    pub period_count_calendar_days: Option<bool>,
    pub requires_confirmation: bool,
    pub disable_guests: bool,
    pub minimum_booking_notice: i32,
    pub price: i32,
    pub currency: String,
    pub metadata: Option<serde_json::Value>,
}

/// Event type as shipped in booking-page props.
///
/// Period dates are stringified (RFC 3339) or null so the shape is
/// plain-JSON serializable, and the derived web3 flag is attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypePage {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub length: i32,
    pub locations: Option<serde_json::Value>,
    pub timezone: Option<String>,
    pub period_type: String,
    pub period_start_date: Option<String>,
    pub period_end_date: Option<String>,
    pub period_days: Option<i32>,
    pub period_count_calendar_days: Option<bool>,
    pub requires_confirmation: bool,
    pub disable_guests: bool,
    pub minimum_booking_notice: i32,
    pub price: i32,
    pub currency: String,
    pub metadata: Option<serde_json::Value>,
    pub is_web3_active: bool,
}

impl EventType {
    /// Reshape for page props, attaching the derived web3 flag.
    pub fn into_page_shape(self, is_web3_active: bool) -> EventTypePage {
        EventTypePage {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            length: self.length,
            locations: self.locations,
            timezone: self.timezone,
            period_type: self.period_type,
            period_start_date: self.period_start_date.map(|d| d.to_rfc3339()),
            period_end_date: self.period_end_date.map(|d| d.to_rfc3339()),
            period_days: self.period_days,
            period_count_calendar_days: self.period_count_calendar_days,
            requires_confirmation: self.requires_confirmation,
            disable_guests: self.disable_guests,
            minimum_booking_notice: self.minimum_booking_notice,
            price: self.price,
            currency: self.currency,
            metadata: self.metadata,
            is_web3_active,
        }
    }
}
