//! Repository for the `event_reactions` table.

use salle_core::types::DbId;
use sqlx::PgPool;

use crate::models::event_reaction::{EventReaction, ReactionWithUser, UpsertEventReaction};

const COLUMNS: &str = "id, event_id, user_id, will_attend, comment, created_at, updated_at";

pub struct EventReactionRepo;

impl EventReactionRepo {
    /// Set a member's RSVP and comment for an event, overwriting the previous one.
    pub async fn upsert(
        pool: &PgPool,
        event_id: DbId,
        user_id: DbId,
        input: &UpsertEventReaction,
    ) -> Result<EventReaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_reactions (event_id, user_id, will_attend, comment)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (event_id, user_id) DO UPDATE SET
                will_attend = EXCLUDED.will_attend,
                comment = EXCLUDED.comment
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventReaction>(&query)
            .bind(event_id)
            .bind(user_id)
            .bind(input.will_attend)
            .bind(input.comment.trim())
            .fetch_one(pool)
            .await
    }

    pub async fn find(
        pool: &PgPool,
        event_id: DbId,
        user_id: DbId,
    ) -> Result<Option<EventReaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM event_reactions WHERE event_id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, EventReaction>(&query)
            .bind(event_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Every reaction on an event with the author's username, attendees first.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<ReactionWithUser>, sqlx::Error> {
        let query = "SELECT r.id, r.event_id, r.user_id, r.will_attend, r.comment,
                            r.created_at, r.updated_at, u.username
                     FROM event_reactions r
                     JOIN users u ON u.id = r.user_id
                     WHERE r.event_id = $1
                     ORDER BY r.will_attend DESC, r.updated_at DESC";
        sqlx::query_as::<_, ReactionWithUser>(query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Number of members who said they will attend.
    pub async fn count_attending(pool: &PgPool, event_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM event_reactions WHERE event_id = $1 AND will_attend",
        )
        .bind(event_id)
        .fetch_one(pool)
        .await
    }
}
