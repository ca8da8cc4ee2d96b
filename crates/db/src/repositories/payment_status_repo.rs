//! Repository for the `payment_statuses` table.

use salle_core::types::DbId;
use sqlx::PgPool;

use crate::models::payment_status::{PaymentStatus, UpdatePaymentStatus};

const COLUMNS: &str = "id, fencer_id, is_paid, payment_date, amount, qr_code_path, \
                       payment_info, created_at, updated_at";

pub struct PaymentStatusRepo;

impl PaymentStatusRepo {
    /// Return the fencer's payment status, creating an unpaid one on first access.
    pub async fn get_or_create(
        pool: &PgPool,
        fencer_id: DbId,
    ) -> Result<PaymentStatus, sqlx::Error> {
        sqlx::query(
            "INSERT INTO payment_statuses (fencer_id) VALUES ($1)
             ON CONFLICT ON CONSTRAINT uq_payment_statuses_fencer_id DO NOTHING",
        )
        .bind(fencer_id)
        .execute(pool)
        .await?;

        let query = format!("SELECT {COLUMNS} FROM payment_statuses WHERE fencer_id = $1");
        sqlx::query_as::<_, PaymentStatus>(&query)
            .bind(fencer_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_fencer(
        pool: &PgPool,
        fencer_id: DbId,
    ) -> Result<Option<PaymentStatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payment_statuses WHERE fencer_id = $1");
        sqlx::query_as::<_, PaymentStatus>(&query)
            .bind(fencer_id)
            .fetch_optional(pool)
            .await
    }

    /// Patch the fencer's status, creating the row first if needed.
    pub async fn update_for_fencer(
        pool: &PgPool,
        fencer_id: DbId,
        input: &UpdatePaymentStatus,
    ) -> Result<PaymentStatus, sqlx::Error> {
        let query = format!(
            "INSERT INTO payment_statuses
                (fencer_id, is_paid, payment_date, amount, qr_code_path, payment_info)
             VALUES ($1, COALESCE($2, FALSE), $3, $4, $5, COALESCE($6, ''))
             ON CONFLICT ON CONSTRAINT uq_payment_statuses_fencer_id DO UPDATE SET
                is_paid = COALESCE($2, payment_statuses.is_paid),
                payment_date = COALESCE($3, payment_statuses.payment_date),
                amount = COALESCE($4, payment_statuses.amount),
                qr_code_path = COALESCE($5, payment_statuses.qr_code_path),
                payment_info = COALESCE($6, payment_statuses.payment_info)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PaymentStatus>(&query)
            .bind(fencer_id)
            .bind(input.is_paid)
            .bind(input.payment_date)
            .bind(input.amount)
            .bind(&input.qr_code_path)
            .bind(&input.payment_info)
            .fetch_one(pool)
            .await
    }
}
