//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod employee;
pub mod product;
pub mod product_accounting;
pub mod storage_zone;
pub mod supplier;
pub mod supply;
pub mod warehouse;

// Re-export specific types to avoid conflicts
pub use employee::{Column as EmployeeColumn, Entity as Employee, Model as EmployeeModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use product_accounting::{
    Column as ProductAccountingColumn, Entity as ProductAccounting,
    Model as ProductAccountingModel,
};
pub use storage_zone::{
    Column as StorageZoneColumn, Entity as StorageZone, Model as StorageZoneModel,
};
pub use supplier::{Column as SupplierColumn, Entity as Supplier, Model as SupplierModel};
pub use supply::{Column as SupplyColumn, Entity as Supply, Model as SupplyModel};
pub use warehouse::{Column as WarehouseColumn, Entity as Warehouse, Model as WarehouseModel};
