//! Supply entity - One delivery of a product from a supplier.
//!
//! Each supply records which product arrived, who shipped it, when, and in
//! what quantity. Accounting records reference the supply they account for.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Supply database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplies")]
pub struct Model {
    /// Unique identifier for the supply
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Product delivered by this supply
    pub product_id: i32,
    /// Supplier that shipped this supply
    pub supplier_id: i32,
    /// Date the supply arrived
    pub supply_date: Date,
    /// Number of product units delivered
    pub quantity: i32,
}

/// `product_id` and `supplier_id` are plain integer columns; integrity is
/// enforced at the application layer, not by the store
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
