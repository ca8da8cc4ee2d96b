//! Repository for the `events` table.

use salle_core::events::{DEFAULT_EVENT_TYPE, DEFAULT_GENDER_SCOPE, EVENT_TYPE_TOURNAMENT};
use salle_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::event::{CalendarEvent, CreateEvent, Event, UpdateEvent};

const COLUMNS: &str = "id, title, description, start_date, end_date, location, external_link, \
                       event_type, gender_scope, created_at, updated_at";

/// Event columns qualified with the `e` alias.
const E_COLUMNS: &str = "e.id, e.title, e.description, e.start_date, e.end_date, e.location, \
    e.external_link, e.event_type, e.gender_scope, e.created_at, e.updated_at";

/// Provides CRUD and calendar queries for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert an event and its (empty) photo album in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO events
                (title, description, start_date, end_date, location, external_link,
                 event_type, gender_scope)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(input.title.trim())
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.location.as_deref().unwrap_or("").trim())
            .bind(input.external_link.as_deref().unwrap_or("").trim())
            .bind(input.event_type.as_deref().unwrap_or(DEFAULT_EVENT_TYPE))
            .bind(input.gender_scope.as_deref().unwrap_or(DEFAULT_GENDER_SCOPE))
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO photo_albums (event_id) VALUES ($1)")
            .bind(event.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(event)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All events, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY start_date DESC, id DESC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Tournaments that at least one of `fencer_ids` took part in, newest first.
    pub async fn list_tournaments_for_fencers(
        pool: &PgPool,
        fencer_ids: &[DbId],
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {E_COLUMNS} FROM events e
             WHERE e.event_type = $1
               AND EXISTS (
                   SELECT 1 FROM event_participations p
                   WHERE p.event_id = e.id AND p.fencer_id = ANY($2)
               )
             ORDER BY e.start_date DESC, e.id DESC"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(EVENT_TYPE_TOURNAMENT)
            .bind(fencer_ids)
            .fetch_all(pool)
            .await
    }

    /// Events starting at or after `now`, soonest first, with the
    /// attendance count and `user_id`'s own reaction.
    pub async fn list_upcoming_for_user(
        pool: &PgPool,
        user_id: DbId,
        now: Timestamp,
    ) -> Result<Vec<CalendarEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {E_COLUMNS},
                    (SELECT COUNT(*) FROM event_reactions r
                      WHERE r.event_id = e.id AND r.will_attend) AS attending_count,
                    mine.will_attend AS my_will_attend,
                    mine.comment AS my_comment
             FROM events e
             LEFT JOIN event_reactions mine ON mine.event_id = e.id AND mine.user_id = $1
             WHERE e.start_date >= $2
             ORDER BY e.start_date ASC, e.id ASC"
        );
        sqlx::query_as::<_, CalendarEvent>(&query)
            .bind(user_id)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// The most recent events that started before `now`, newest first.
    pub async fn list_past(
        pool: &PgPool,
        now: Timestamp,
        limit: i64,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE start_date < $1
             ORDER BY start_date DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(now)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                location = COALESCE($6, location),
                external_link = COALESCE($7, external_link),
                event_type = COALESCE($8, event_type),
                gender_scope = COALESCE($9, gender_scope)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.location.as_deref().map(str::trim))
            .bind(input.external_link.as_deref().map(str::trim))
            .bind(&input.event_type)
            .bind(&input.gender_scope)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event together with its participations, reactions and album.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
