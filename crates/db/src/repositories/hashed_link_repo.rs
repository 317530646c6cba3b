//! Repository for the `hashed_links` table.

use sqlx::PgPool;

use crate::models::hashed_link::DisposableLink;

/// Read access to disposable booking links.
pub struct HashedLinkRepo;

impl HashedLinkRepo {
    /// Look up a link by its `(link, slug)` composite key.
    ///
    /// The slug lives on the joined event type; a link whose event type
    /// does not match the slug resolves to `None`.
    pub async fn find_by_link_and_slug(
        pool: &PgPool,
        link: &str,
        slug: &str,
    ) -> Result<Option<DisposableLink>, sqlx::Error> {
        sqlx::query_as::<_, DisposableLink>(
            "SELECT hl.id, hl.link, et.slug, hl.expired, hl.event_type_id,
                    et.user_id AS event_type_user_id, hl.timezone
             FROM hashed_links hl
             JOIN event_types et ON et.id = hl.event_type_id
             WHERE hl.link = $1 AND et.slug = $2",
        )
        .bind(link)
        .bind(slug)
        .fetch_optional(pool)
        .await
    }
}
