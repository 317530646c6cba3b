//! Repository for the `event_types` table.

use sqlx::PgPool;
use slotlink_core::types::DbId;

use crate::models::event_type::EventType;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, description, length, hidden, user_id, locations, \
                       timezone, period_type, period_start_date, period_end_date, period_days, \
                       period_count_calendar_days, requires_confirmation, disable_guests, \
                       minimum_booking_notice, price, currency, metadata";

/// Read access to event types.
pub struct EventTypeRepo;

impl EventTypeRepo {
    /// Fetch an event type by internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EventType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM event_types WHERE id = $1");
        sqlx::query_as::<_, EventType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
