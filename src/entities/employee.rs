//! Employee entity - Represents warehouse staff responsible for accounting records.
//!
//! Each employee has a full name, a position, and an optional phone number.
//! Accounting records reference the employee who recorded them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Employee database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Unique identifier for the employee
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Full name of the employee
    pub full_name: String,
    /// Job position (e.g., "storekeeper", "shift supervisor")
    pub position: String,
    /// Contact phone number, if known
    pub phone: Option<String>,
}

/// Employees are referenced by accounting records through a plain integer
/// column; integrity is enforced at the application layer, not by the store
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
