//! Accounting engine - All queries and mutations over the product-accounting fact table.
//!
//! This module owns every write to the fact table and all multi-shape read
//! queries over it: the full and filtered joins, the per-zone aggregation,
//! the narrow projection, and the correlated and non-correlated subquery
//! forms. Mutations validate their arguments locally, gate every supplied
//! foreign key through the existence validator inside one store transaction,
//! and only then write. Raw statements are always parameterized; user input
//! is never concatenated into SQL.

use crate::{
    core::validator::{self, Reference},
    entities::{ProductAccounting, product_accounting},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{
    Condition, FromQueryResult, QueryOrder, QuerySelect, Set, Statement, TransactionTrait,
    prelude::*,
};
use tracing::{info, instrument};

/// One fact row joined with its employee and storage-zone projections.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct JoinedRecord {
    /// Fact row id
    pub id: i32,
    /// Date the goods were accounted for
    pub accounting_date: Date,
    /// Number of product units
    pub quantity: i32,
    /// Date of the last movement, if any
    pub last_movement_date: Option<Date>,
    /// Free-form movement status, if any
    pub movement_status: Option<String>,
    /// Full name of the recording employee
    pub employee_name: String,
    /// Position of the recording employee
    pub employee_position: String,
    /// Name of the storage zone holding the goods
    pub zone_name: String,
    /// Type of the storage zone holding the goods
    pub zone_type: String,
}

/// Per-zone aggregation of fact rows.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ZoneAggregate {
    /// Name of the storage zone the group belongs to
    pub zone_name: String,
    /// Number of fact rows in the group
    pub record_count: i64,
    /// Sum of quantities over the group
    pub total_quantity: i64,
    /// Average quantity over the group
    pub average_quantity: f64,
}

/// A fact row reduced to the table's own columns, no joins.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct SimpleRecord {
    /// Fact row id
    pub id: i32,
    /// Date the goods were accounted for
    pub accounting_date: Date,
    /// Number of product units
    pub quantity: i32,
    /// Recording employee id
    pub employee_id: i32,
    /// Accounted supply id
    pub supply_id: i32,
    /// Storage zone id
    pub storage_id: i32,
}

/// A fact row with supply date and employee name resolved per row.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct SupplyDetailRecord {
    /// Fact row id
    pub id: i32,
    /// Date the goods were accounted for
    pub accounting_date: Date,
    /// Number of product units
    pub quantity: i32,
    /// Arrival date of the referenced supply; None if the supply is gone
    pub supply_date: Option<Date>,
    /// Name of the recording employee; None if the employee is gone
    pub employee_name: Option<String>,
}

/// Current UTC calendar date; the upper bound for every stored date.
fn today() -> Date {
    Utc::now().date_naive()
}

fn ensure_positive_record_id(id: i32) -> Result<()> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("record id must be positive, got {id}"),
        });
    }
    Ok(())
}

fn ensure_positive_quantity(quantity: i32) -> Result<()> {
    if quantity <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("quantity must be positive, got {quantity}"),
        });
    }
    Ok(())
}

fn ensure_not_future(what: &str, date: Date) -> Result<()> {
    if date > today() {
        return Err(Error::InvalidArgument {
            message: format!("{what} {date} is in the future"),
        });
    }
    Ok(())
}

/// Retrieves every fact row joined with its employee and storage-zone
/// projections, ordered by record id. An empty table yields an empty vec.
pub async fn get_all_records(db: &DatabaseConnection) -> Result<Vec<JoinedRecord>> {
    let stmt = Statement::from_string(
        db.get_database_backend(),
        r"SELECT pa.id,
                 pa.accounting_date,
                 pa.quantity,
                 pa.last_movement_date,
                 pa.movement_status,
                 e.full_name AS employee_name,
                 e.position AS employee_position,
                 sz.zone_name,
                 sz.zone_type
          FROM product_accounting AS pa
          INNER JOIN employees AS e ON e.id = pa.employee_id
          INNER JOIN storage_zones AS sz ON sz.id = pa.storage_id
          ORDER BY pa.id ASC",
    );
    JoinedRecord::find_by_statement(stmt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the joined projection for one employee's records.
///
/// An empty result is valid even when no such employee exists; only the id
/// shape is checked here.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `employee_id <= 0`.
pub async fn get_records_by_employee(
    db: &DatabaseConnection,
    employee_id: i32,
) -> Result<Vec<JoinedRecord>> {
    Reference::Employee.ensure_positive(employee_id)?;

    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        r"SELECT pa.id,
                 pa.accounting_date,
                 pa.quantity,
                 pa.last_movement_date,
                 pa.movement_status,
                 e.full_name AS employee_name,
                 e.position AS employee_position,
                 sz.zone_name,
                 sz.zone_type
          FROM product_accounting AS pa
          INNER JOIN employees AS e ON e.id = pa.employee_id
          INNER JOIN storage_zones AS sz ON sz.id = pa.storage_id
          WHERE pa.employee_id = ?
          ORDER BY pa.id ASC",
        [employee_id.into()],
    );
    JoinedRecord::find_by_statement(stmt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Aggregates fact rows by storage zone.
///
/// Rows dated before `start_date` are excluded before grouping; groups with
/// fewer than `min_record_count` rows are dropped. Output rows carry the
/// zone name, row count, quantity sum, and quantity average, ordered by
/// zone name.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `min_record_count < 0` or
/// `start_date` is in the future.
pub async fn get_aggregate_records(
    db: &DatabaseConnection,
    min_record_count: i32,
    start_date: Date,
) -> Result<Vec<ZoneAggregate>> {
    if min_record_count < 0 {
        return Err(Error::InvalidArgument {
            message: format!("minimum record count must not be negative, got {min_record_count}"),
        });
    }
    ensure_not_future("start date", start_date)?;

    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        r"SELECT sz.zone_name,
                 COUNT(pa.id) AS record_count,
                 SUM(pa.quantity) AS total_quantity,
                 AVG(pa.quantity) AS average_quantity
          FROM product_accounting AS pa
          INNER JOIN storage_zones AS sz ON sz.id = pa.storage_id
          WHERE pa.accounting_date >= ?
          GROUP BY sz.zone_name
          HAVING COUNT(pa.id) >= ?
          ORDER BY sz.zone_name ASC",
        [start_date.into(), min_record_count.into()],
    );
    ZoneAggregate::find_by_statement(stmt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every fact row reduced to the table's own columns, no joins,
/// ordered by record id.
pub async fn get_simple_records(db: &DatabaseConnection) -> Result<Vec<SimpleRecord>> {
    ProductAccounting::find()
        .select_only()
        .columns([
            product_accounting::Column::Id,
            product_accounting::Column::AccountingDate,
            product_accounting::Column::Quantity,
            product_accounting::Column::EmployeeId,
            product_accounting::Column::SupplyId,
            product_accounting::Column::StorageId,
        ])
        .order_by_asc(product_accounting::Column::Id)
        .into_model::<SimpleRecord>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves one supply's fact rows with the supply date and employee name
/// resolved by scalar subqueries that depend on each outer row.
///
/// The per-row recomputation is the point of this shape; it is not
/// interchangeable with [`get_non_correlated_subquery`].
///
/// # Errors
/// Returns `Error::InvalidArgument` if `supply_id <= 0`.
pub async fn get_correlated_subquery(
    db: &DatabaseConnection,
    supply_id: i32,
) -> Result<Vec<SupplyDetailRecord>> {
    Reference::Supply.ensure_positive(supply_id)?;

    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        r"SELECT pa.id,
                 pa.accounting_date,
                 pa.quantity,
                 (SELECT s.supply_date FROM supplies AS s WHERE s.id = pa.supply_id) AS supply_date,
                 (SELECT e.full_name FROM employees AS e WHERE e.id = pa.employee_id) AS employee_name
          FROM product_accounting AS pa
          WHERE pa.supply_id = ?
          ORDER BY pa.id ASC",
        [supply_id.into()],
    );
    SupplyDetailRecord::find_by_statement(stmt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves one supply's fact rows whose quantity strictly exceeds the
/// supply's average quantity.
///
/// The average is computed once by an independent subquery and reused as the
/// threshold for every row, in contrast to [`get_correlated_subquery`].
///
/// # Errors
/// Returns `Error::InvalidArgument` if `supply_id <= 0`.
pub async fn get_non_correlated_subquery(
    db: &DatabaseConnection,
    supply_id: i32,
) -> Result<Vec<SimpleRecord>> {
    Reference::Supply.ensure_positive(supply_id)?;

    let stmt = Statement::from_sql_and_values(
        db.get_database_backend(),
        r"SELECT pa.id,
                 pa.accounting_date,
                 pa.quantity,
                 pa.employee_id,
                 pa.supply_id,
                 pa.storage_id
          FROM product_accounting AS pa
          WHERE pa.supply_id = ?
            AND pa.quantity > (SELECT AVG(quantity)
                               FROM product_accounting
                               WHERE supply_id = ?)
          ORDER BY pa.id ASC",
        [supply_id.into(), supply_id.into()],
    );
    SimpleRecord::find_by_statement(stmt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Checks whether an employee exists.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `employee_id <= 0`.
pub async fn employee_exists(db: &DatabaseConnection, employee_id: i32) -> Result<bool> {
    validator::reference_exists(db, Reference::Employee, employee_id).await
}

/// Checks whether a supply exists.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `supply_id <= 0`.
pub async fn supply_exists(db: &DatabaseConnection, supply_id: i32) -> Result<bool> {
    validator::reference_exists(db, Reference::Supply, supply_id).await
}

/// Checks whether a storage zone exists.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `storage_id <= 0`.
pub async fn storage_zone_exists(db: &DatabaseConnection, storage_id: i32) -> Result<bool> {
    validator::reference_exists(db, Reference::StorageZone, storage_id).await
}

/// Checks whether an accounting record exists.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `record_id <= 0`.
pub async fn record_exists(db: &DatabaseConnection, record_id: i32) -> Result<bool> {
    ensure_positive_record_id(record_id)?;
    Ok(ProductAccounting::find_by_id(record_id)
        .one(db)
        .await?
        .is_some())
}

/// Retrieves one accounting record by id, or None when absent.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `id <= 0`.
pub async fn get_record_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<product_accounting::Model>> {
    ensure_positive_record_id(id)?;
    ProductAccounting::find_by_id(id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Case-insensitively filters accounting records whose movement status
/// contains the search text, ordered by record id.
pub async fn find_records_matching(
    db: &DatabaseConnection,
    search_text: &str,
) -> Result<Vec<product_accounting::Model>> {
    ProductAccounting::find()
        .filter(
            Condition::any().add(product_accounting::Column::MovementStatus.contains(search_text)),
        )
        .order_by_asc(product_accounting::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Inserts a new accounting record after validating every argument and
/// confirming all three references exist.
///
/// The existence checks and the insert run in one store transaction, so the
/// sequence is all-or-nothing from the caller's perspective. A referenced
/// entity deleted concurrently between check and commit is tolerated; no
/// lock is taken on the referenced rows.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `quantity <= 0`, `accounting_date`
/// is in the future, or any id is non-positive; `Error::InvalidOperation`
/// naming the missing reference if the employee, supply, or storage zone
/// does not exist.
#[instrument(skip(db))]
pub async fn insert_record(
    db: &DatabaseConnection,
    accounting_date: Date,
    quantity: i32,
    employee_id: i32,
    supply_id: i32,
    storage_id: i32,
) -> Result<product_accounting::Model> {
    ensure_positive_quantity(quantity)?;
    ensure_not_future("accounting date", accounting_date)?;
    Reference::Employee.ensure_positive(employee_id)?;
    Reference::Supply.ensure_positive(supply_id)?;
    Reference::StorageZone.ensure_positive(storage_id)?;

    let txn = db.begin().await?;

    validator::ensure_reference_exists(&txn, Reference::Employee, employee_id).await?;
    validator::ensure_reference_exists(&txn, Reference::Supply, supply_id).await?;
    validator::ensure_reference_exists(&txn, Reference::StorageZone, storage_id).await?;

    let record = product_accounting::ActiveModel {
        supply_id: Set(supply_id),
        employee_id: Set(employee_id),
        storage_id: Set(storage_id),
        accounting_date: Set(accounting_date),
        quantity: Set(quantity),
        ..Default::default()
    };
    let inserted = record.insert(&txn).await?;

    txn.commit().await?;

    info!(
        "Inserted accounting record {} for supply {} in zone {}",
        inserted.id, supply_id, storage_id
    );
    Ok(inserted)
}

/// Partially updates an accounting record: every parameter except `id` is
/// optional and an absent parameter leaves the stored value untouched.
///
/// Supplied fields are validated individually before the store is consulted,
/// and only the supplied columns appear in the update statement; nothing is
/// overwritten with defaults. Supplied foreign keys are gated through the
/// existence validator inside the same transaction as the write.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `id <= 0` or any supplied field
/// violates its own constraint; `Error::InvalidOperation` if the record or
/// any supplied reference does not exist.
#[instrument(skip(db))]
pub async fn update_record(
    db: &DatabaseConnection,
    id: i32,
    accounting_date: Option<Date>,
    quantity: Option<i32>,
    employee_id: Option<i32>,
    supply_id: Option<i32>,
    storage_id: Option<i32>,
) -> Result<product_accounting::Model> {
    ensure_positive_record_id(id)?;
    if let Some(quantity) = quantity {
        ensure_positive_quantity(quantity)?;
    }
    if let Some(accounting_date) = accounting_date {
        ensure_not_future("accounting date", accounting_date)?;
    }
    if let Some(employee_id) = employee_id {
        Reference::Employee.ensure_positive(employee_id)?;
    }
    if let Some(supply_id) = supply_id {
        Reference::Supply.ensure_positive(supply_id)?;
    }
    if let Some(storage_id) = storage_id {
        Reference::StorageZone.ensure_positive(storage_id)?;
    }

    let txn = db.begin().await?;

    let existing = ProductAccounting::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::InvalidOperation {
            message: format!("accounting record with id {id} does not exist"),
        })?;

    if let Some(employee_id) = employee_id {
        validator::ensure_reference_exists(&txn, Reference::Employee, employee_id).await?;
    }
    if let Some(supply_id) = supply_id {
        validator::ensure_reference_exists(&txn, Reference::Supply, supply_id).await?;
    }
    if let Some(storage_id) = storage_id {
        validator::ensure_reference_exists(&txn, Reference::StorageZone, storage_id).await?;
    }

    if accounting_date.is_none()
        && quantity.is_none()
        && employee_id.is_none()
        && supply_id.is_none()
        && storage_id.is_none()
    {
        // Nothing to change; the existence check above still applies
        txn.commit().await?;
        return Ok(existing);
    }

    let mut record: product_accounting::ActiveModel = existing.into();
    if let Some(accounting_date) = accounting_date {
        record.accounting_date = Set(accounting_date);
    }
    if let Some(quantity) = quantity {
        record.quantity = Set(quantity);
    }
    if let Some(employee_id) = employee_id {
        record.employee_id = Set(employee_id);
    }
    if let Some(supply_id) = supply_id {
        record.supply_id = Set(supply_id);
    }
    if let Some(storage_id) = storage_id {
        record.storage_id = Set(storage_id);
    }

    let updated = record.update(&txn).await?;
    txn.commit().await?;

    info!("Updated accounting record {id}");
    Ok(updated)
}

/// Records a movement of the accounted goods, stamping the movement date and
/// status on the record.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `id <= 0`, `movement_date` is in the
/// future, or `movement_status` is empty; `Error::InvalidOperation` if the
/// record does not exist.
#[instrument(skip(db))]
pub async fn record_movement(
    db: &DatabaseConnection,
    id: i32,
    movement_date: Date,
    movement_status: String,
) -> Result<product_accounting::Model> {
    ensure_positive_record_id(id)?;
    ensure_not_future("movement date", movement_date)?;
    if movement_status.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "movement status cannot be empty".to_string(),
        });
    }

    let txn = db.begin().await?;

    let existing = ProductAccounting::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::InvalidOperation {
            message: format!("accounting record with id {id} does not exist"),
        })?;

    let mut record: product_accounting::ActiveModel = existing.into();
    record.last_movement_date = Set(Some(movement_date));
    record.movement_status = Set(Some(movement_status.trim().to_string()));

    let updated = record.update(&txn).await?;
    txn.commit().await?;

    Ok(updated)
}

/// Deletes an accounting record after confirming it exists. The delete is
/// terminal and cascades to nothing.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `id <= 0`, or
/// `Error::InvalidOperation` if no such record exists.
#[instrument(skip(db))]
pub async fn delete_record(db: &DatabaseConnection, id: i32) -> Result<()> {
    ensure_positive_record_id(id)?;

    let txn = db.begin().await?;

    let existing = ProductAccounting::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::InvalidOperation {
            message: format!("accounting record with id {id} does not exist"),
        })?;

    existing.delete(&txn).await?;
    txn.commit().await?;

    info!("Deleted accounting record {id}");
    Ok(())
}
