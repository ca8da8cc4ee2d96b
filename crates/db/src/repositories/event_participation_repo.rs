//! Repository for the `event_participations` table.

use salle_core::types::DbId;
use sqlx::PgPool;

use crate::models::event_participation::{
    EventParticipation, ParticipationWithEvent, UpdateParticipation, UpsertParticipation,
};

const COLUMNS: &str = "id, fencer_id, event_id, position, wins, losses, touches_scored, \
                       touches_received, created_at, updated_at";

/// Participation columns (alias `p`) plus event headline fields (alias `e`).
const WITH_EVENT_COLUMNS: &str = "p.id, p.fencer_id, p.event_id, p.position, p.wins, p.losses, \
    p.touches_scored, p.touches_received, p.created_at, p.updated_at, \
    e.title AS event_title, e.start_date AS event_start_date, e.event_type, \
    e.location AS event_location";

/// Provides result recording and statistics reads for participations.
pub struct EventParticipationRepo;

impl EventParticipationRepo {
    /// Record a fencer's result at an event, replacing any previous one.
    pub async fn upsert(
        pool: &PgPool,
        event_id: DbId,
        input: &UpsertParticipation,
    ) -> Result<EventParticipation, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_participations
                (fencer_id, event_id, position, wins, losses, touches_scored, touches_received)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (fencer_id, event_id) DO UPDATE SET
                position = EXCLUDED.position,
                wins = EXCLUDED.wins,
                losses = EXCLUDED.losses,
                touches_scored = EXCLUDED.touches_scored,
                touches_received = EXCLUDED.touches_received
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventParticipation>(&query)
            .bind(input.fencer_id)
            .bind(event_id)
            .bind(input.position)
            .bind(input.wins)
            .bind(input.losses)
            .bind(input.touches_scored)
            .bind(input.touches_received)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EventParticipation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM event_participations WHERE id = $1");
        sqlx::query_as::<_, EventParticipation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Results at one event, best placement first (unplaced last).
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<EventParticipation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM event_participations
             WHERE event_id = $1
             ORDER BY position ASC NULLS LAST, wins DESC, id ASC"
        );
        sqlx::query_as::<_, EventParticipation>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// A fencer's participations with event details, most recent event first.
    pub async fn list_for_fencer(
        pool: &PgPool,
        fencer_id: DbId,
    ) -> Result<Vec<ParticipationWithEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_EVENT_COLUMNS}
             FROM event_participations p
             JOIN events e ON e.id = p.event_id
             WHERE p.fencer_id = $1
             ORDER BY e.start_date DESC, p.id DESC"
        );
        sqlx::query_as::<_, ParticipationWithEvent>(&query)
            .bind(fencer_id)
            .fetch_all(pool)
            .await
    }

    /// Participations of several fencers (a club's members), most recent first.
    pub async fn list_for_fencers(
        pool: &PgPool,
        fencer_ids: &[DbId],
    ) -> Result<Vec<ParticipationWithEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_EVENT_COLUMNS}
             FROM event_participations p
             JOIN events e ON e.id = p.event_id
             WHERE p.fencer_id = ANY($1)
             ORDER BY e.start_date DESC, p.id DESC"
        );
        sqlx::query_as::<_, ParticipationWithEvent>(&query)
            .bind(fencer_ids)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateParticipation,
    ) -> Result<Option<EventParticipation>, sqlx::Error> {
        let query = format!(
            "UPDATE event_participations SET
                position = COALESCE($2, position),
                wins = COALESCE($3, wins),
                losses = COALESCE($4, losses),
                touches_scored = COALESCE($5, touches_scored),
                touches_received = COALESCE($6, touches_received)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EventParticipation>(&query)
            .bind(id)
            .bind(input.position)
            .bind(input.wins)
            .bind(input.losses)
            .bind(input.touches_scored)
            .bind(input.touches_received)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM event_participations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
