//! Supplier entity - A company that delivers products to the warehouse.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Supplier database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    /// Unique identifier for the supplier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Registered company name
    pub company_name: String,
    /// Contact person at the company
    pub contact_person: String,
    /// Contact phone number
    pub phone: String,
    /// Postal address
    pub address: String,
}

/// Suppliers are referenced by supplies through a plain integer column;
/// no store-level foreign keys are declared
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
