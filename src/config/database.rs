//! Database configuration module for `Stockbook`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{
    Employee, Product, ProductAccounting, StorageZone, Supplier, Supply, Warehouse,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/stockbook.sqlite".to_string())
}

/// Establishes a connection to the database using the `DATABASE_URL` environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is set.
/// This function handles connection errors and provides a clean interface for database access
/// throughout the application.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct
/// definitions. It creates tables for every entity in the warehouse model, referenced
/// tables first.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let employee_table = schema.create_table_from_entity(Employee);
    let product_table = schema.create_table_from_entity(Product);
    let supplier_table = schema.create_table_from_entity(Supplier);
    let warehouse_table = schema.create_table_from_entity(Warehouse);
    let storage_zone_table = schema.create_table_from_entity(StorageZone);
    let supply_table = schema.create_table_from_entity(Supply);
    let product_accounting_table = schema.create_table_from_entity(ProductAccounting);

    db.execute(builder.build(&employee_table)).await?;
    db.execute(builder.build(&product_table)).await?;
    db.execute(builder.build(&supplier_table)).await?;
    db.execute(builder.build(&warehouse_table)).await?;
    db.execute(builder.build(&storage_zone_table)).await?;
    db.execute(builder.build(&supply_table)).await?;
    db.execute(builder.build(&product_accounting_table)).await?;

    Ok(())
}
