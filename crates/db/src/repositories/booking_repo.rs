//! Repository for the `bookings` and `attendees` tables.

use sqlx::PgPool;

use crate::models::booking::{Attendee, BookingRow, RescheduleBooking};

/// Read access to bookings for reschedule flows.
pub struct BookingRepo;

impl BookingRepo {
    /// Fetch the `{description, attendees}` projection for a booking uid.
    pub async fn find_reschedule_summary(
        pool: &PgPool,
        uid: &str,
    ) -> Result<Option<RescheduleBooking>, sqlx::Error> {
        let booking = sqlx::query_as::<_, BookingRow>(
            "SELECT id, description FROM bookings WHERE uid = $1",
        )
        .bind(uid)
        .fetch_optional(pool)
        .await?;

        let Some(booking) = booking else {
            return Ok(None);
        };

        let attendees = sqlx::query_as::<_, Attendee>(
            "SELECT name, email, timezone FROM attendees WHERE booking_id = $1 ORDER BY id",
        )
        .bind(booking.id)
        .fetch_all(pool)
        .await?;

        Ok(Some(RescheduleBooking {
            description: booking.description,
            attendees,
        }))
    }
}
