//! Shared test utilities for `Stockbook`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    config,
    core::{accounting, employee, product, storage_zone, supplier, supply, warehouse},
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    config::database::create_tables(&db).await?;
    Ok(db)
}

/// Installs a tracing subscriber once, for debugging test runs with
/// `RUST_LOG` set.
pub fn init_test_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Builds a calendar date; panics on invalid input, which is fine in tests.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Creates a test employee with sensible defaults.
pub async fn create_test_employee(
    db: &DatabaseConnection,
    full_name: &str,
) -> Result<entities::employee::Model> {
    employee::create_employee(db, full_name.to_string(), "storekeeper".to_string(), None).await
}

/// Creates a test product with sensible defaults.
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::product::Model> {
    product::create_product(db, name.to_string(), "food".to_string(), None).await
}

/// Creates a test supplier with sensible defaults.
pub async fn create_test_supplier(db: &DatabaseConnection) -> Result<entities::supplier::Model> {
    supplier::create_supplier(
        db,
        "Acme Logistics".to_string(),
        "R. Ortiz".to_string(),
        "+1-555-0100".to_string(),
        "7 Pier Street".to_string(),
    )
    .await
}

/// Creates a test warehouse with sensible defaults.
pub async fn create_test_warehouse(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::warehouse::Model> {
    warehouse::create_warehouse(db, name.to_string(), "1 Depot Way".to_string()).await
}

/// Creates a test storage zone inside the given warehouse.
pub async fn create_test_zone(
    db: &DatabaseConnection,
    warehouse_id: i32,
    zone_name: &str,
) -> Result<entities::storage_zone::Model> {
    storage_zone::create_storage_zone(db, warehouse_id, zone_name.to_string(), "dry".to_string(), 500)
        .await
}

/// Creates a test supply of 100 units delivered on 2024-01-10.
pub async fn create_test_supply(
    db: &DatabaseConnection,
    product_id: i32,
    supplier_id: i32,
) -> Result<entities::supply::Model> {
    supply::create_supply(db, product_id, supplier_id, date(2024, 1, 10), 100).await
}

/// The referenced rows an accounting record needs.
pub struct AccountingRefs {
    /// Recording employee
    pub employee: entities::employee::Model,
    /// Accounted supply
    pub supply: entities::supply::Model,
    /// Storage zone holding the goods
    pub zone: entities::storage_zone::Model,
}

/// Creates one employee, one full supply chain, and one zone to reference.
pub async fn create_references(db: &DatabaseConnection) -> Result<AccountingRefs> {
    let employee = create_test_employee(db, "Mira Kovac").await?;
    let product = create_test_product(db, "Canned Beans").await?;
    let supplier = create_test_supplier(db).await?;
    let supply = create_test_supply(db, product.id, supplier.id).await?;
    let warehouse_row = create_test_warehouse(db, "Central").await?;
    let zone = create_test_zone(db, warehouse_row.id, "A-1").await?;
    Ok(AccountingRefs {
        employee,
        supply,
        zone,
    })
}

/// Sets up a complete test environment with every reference an accounting
/// record needs. Returns (db, refs) for engine test scenarios.
pub async fn setup_with_references() -> Result<(DatabaseConnection, AccountingRefs)> {
    let db = setup_test_db().await?;
    let refs = create_references(&db).await?;
    Ok((db, refs))
}

/// Inserts a valid accounting record against the fixture references.
pub async fn insert_test_record(
    db: &DatabaseConnection,
    refs: &AccountingRefs,
    accounting_date: NaiveDate,
    quantity: i32,
) -> Result<entities::product_accounting::Model> {
    accounting::insert_record(
        db,
        accounting_date,
        quantity,
        refs.employee.id,
        refs.supply.id,
        refs.zone.id,
    )
    .await
}
