//! Booking reschedule projection.

use serde::Serialize;
use sqlx::FromRow;
use slotlink_core::types::DbId;

/// Minimal booking row used while assembling a reschedule summary.
#[derive(Debug, Clone, FromRow)]
pub struct BookingRow {
    pub id: DbId,
    pub description: Option<String>,
}

/// One attendee of a booking.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attendee {
    pub name: String,
    pub email: String,
    pub timezone: String,
}

/// The `{description, attendees}` projection shipped in page props when
/// a reschedule uid is present.
#[derive(Debug, Clone, Serialize)]
pub struct RescheduleBooking {
    pub description: Option<String>,
    pub attendees: Vec<Attendee>,
}
