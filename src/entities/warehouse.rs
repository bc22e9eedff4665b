//! Warehouse entity - A physical warehouse containing storage zones.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Warehouse database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "warehouses")]
pub struct Model {
    /// Unique identifier for the warehouse
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Warehouse name
    pub name: String,
    /// Street address
    pub address: String,
}

/// Warehouses are referenced by storage zones through a plain integer column;
/// no store-level foreign keys are declared
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
