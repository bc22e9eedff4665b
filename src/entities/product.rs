//! Product entity - Represents the goods tracked by the warehouse.
//!
//! Each product has a name, a type, an active flag, and optionally an expiry
//! date and a photo. Supplies reference the product they deliver.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Human-readable product name
    pub name: String,
    /// Expiry date, None for non-perishables
    pub expiry_date: Option<Date>,
    /// Product classification (e.g., "food", "electronics")
    pub product_type: String,
    /// Whether the product is currently in the assortment
    pub is_active: bool,
    /// Optional product photo
    pub photo: Option<Vec<u8>>,
}

/// Products are referenced by supplies through a plain integer column;
/// no store-level foreign keys are declared
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
