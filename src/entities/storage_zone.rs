//! Storage zone entity - A bounded area inside a warehouse.
//!
//! Zones carry a name, a type (e.g., "cold", "dry", "hazmat"), and a capacity
//! in product units. Accounting records reference the zone holding the goods.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Storage zone database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "storage_zones")]
pub struct Model {
    /// Unique identifier for the zone
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Warehouse this zone belongs to
    pub warehouse_id: i32,
    /// Zone name, unique within its warehouse (e.g., "A-1")
    pub zone_name: String,
    /// Zone classification (e.g., "cold", "dry")
    pub zone_type: String,
    /// Capacity in product units
    pub capacity: i32,
}

/// `warehouse_id` is a plain integer column; integrity is enforced at the
/// application layer, not by the store
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
