//! Business logic - framework-agnostic warehouse accounting operations.
//!
//! Each entity gets a thin repository module with uniform CRUD and filter
//! operations. The accounting engine in [`accounting`] owns every write to
//! the product-accounting fact table and all multi-shape read queries over
//! it, with [`validator`] gating cross-entity references.

/// The accounting query and mutation engine over the fact table
pub mod accounting;
/// Employee repository
pub mod employee;
/// Product repository
pub mod product;
/// Storage zone repository
pub mod storage_zone;
/// Supplier repository
pub mod supplier;
/// Supply repository
pub mod supply;
/// Existence validation for cross-entity references
pub mod validator;
/// Warehouse repository and layout seeding
pub mod warehouse;
