//! Repository for the `photo_likes` table.

use salle_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::LikeState;

pub struct PhotoLikeRepo;

impl PhotoLikeRepo {
    /// Flip `user_id`'s like on a photo and return the resulting state.
    pub async fn toggle(
        pool: &PgPool,
        photo_id: DbId,
        user_id: DbId,
    ) -> Result<LikeState, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let removed = sqlx::query("DELETE FROM photo_likes WHERE photo_id = $1 AND user_id = $2")
            .bind(photo_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        if !removed {
            sqlx::query(
                "INSERT INTO photo_likes (photo_id, user_id) VALUES ($1, $2)
                 ON CONFLICT ON CONSTRAINT uq_photo_likes_photo_user DO NOTHING",
            )
            .bind(photo_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        }

        let like_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM photo_likes WHERE photo_id = $1")
                .bind(photo_id)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok(LikeState {
            liked: !removed,
            like_count,
        })
    }

    pub async fn count_for_photo(pool: &PgPool, photo_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM photo_likes WHERE photo_id = $1")
            .bind(photo_id)
            .fetch_one(pool)
            .await
    }
}
