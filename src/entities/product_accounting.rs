//! Product accounting entity - The fact table of the warehouse ledger.
//!
//! Each record states that an employee accounted for a quantity of product
//! from one supply in one storage zone on a given date. Foreign keys are
//! validated by the accounting engine when a record is written; they are not
//! re-validated on later reads, and the store itself declares no foreign-key
//! constraints.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product accounting database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_accounting")]
pub struct Model {
    /// Unique identifier for the record, assigned by the store
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Supply the accounted goods arrived with
    pub supply_id: i32,
    /// Employee who recorded the entry
    pub employee_id: i32,
    /// Storage zone holding the goods
    pub storage_id: i32,
    /// Date the goods were accounted for; never in the future
    pub accounting_date: Date,
    /// Number of product units; always positive
    pub quantity: i32,
    /// Date of the last movement, None if the goods never moved
    pub last_movement_date: Option<Date>,
    /// Free-form movement status (e.g., "in storage", "in transit")
    pub movement_status: Option<String>,
}

/// `supply_id`, `employee_id`, and `storage_id` are plain integer columns
/// validated at write time; no store-level foreign keys are declared
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
