//! Membership fee status per fencer.

use rust_decimal::Decimal;
use salle_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `payment_statuses` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PaymentStatus {
    pub id: DbId,
    pub fencer_id: DbId,
    pub is_paid: bool,
    pub payment_date: Option<Date>,
    pub amount: Option<Decimal>,
    pub qr_code_path: Option<String>,
    pub payment_info: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePaymentStatus {
    pub is_paid: Option<bool>,
    pub payment_date: Option<Date>,
    pub amount: Option<Decimal>,
    pub qr_code_path: Option<String>,
    pub payment_info: Option<String>,
}
