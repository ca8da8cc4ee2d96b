//! Equipment catalog and per-fencer ownership flags.

use rust_decimal::Decimal;
use salle_core::equipment_loadout::CatalogEntry;
use salle_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `equipment_items` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EquipmentItem {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub approximate_price: Option<Decimal>,
    pub purchase_link: String,
    pub image_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Catalog item as seen by one fencer.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OwnedEquipment {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub item: EquipmentItem,
    pub is_owned: bool,
    pub purchase_date: Option<Date>,
}

impl CatalogEntry for OwnedEquipment {
    fn id(&self) -> DbId {
        self.item.id
    }

    fn name(&self) -> &str {
        &self.item.name
    }

    fn description(&self) -> &str {
        &self.item.description
    }

    fn purchase_link(&self) -> &str {
        &self.item.purchase_link
    }

    fn is_owned(&self) -> bool {
        self.is_owned
    }
}

/// A row from the `user_equipment` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserEquipment {
    pub id: DbId,
    pub fencer_id: DbId,
    pub equipment_id: DbId,
    pub is_owned: bool,
    pub purchase_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of the equipment checklist toggle.
#[derive(Debug, Deserialize)]
pub struct SetOwned {
    pub equipment_id: DbId,
    pub is_owned: bool,
}
