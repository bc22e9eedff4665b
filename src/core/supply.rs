//! Supply repository - CRUD operations over product deliveries.
//!
//! A supply references a product and a supplier by plain integer columns;
//! like every reference in this crate, they are shape-checked here and
//! existence-checked only where the accounting engine requires it.

use crate::{
    entities::{Supply, supply},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all supplies, ordered by id.
pub async fn get_all_supplies(db: &DatabaseConnection) -> Result<Vec<supply::Model>> {
    Supply::find()
        .order_by_asc(supply::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific supply by id, or None when absent.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `id <= 0`.
pub async fn get_supply_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<supply::Model>> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("supply id must be positive, got {id}"),
        });
    }
    Supply::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Creates a new supply record for a delivered batch of product.
pub async fn create_supply(
    db: &DatabaseConnection,
    product_id: i32,
    supplier_id: i32,
    supply_date: Date,
    quantity: i32,
) -> Result<supply::Model> {
    if product_id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("product id must be positive, got {product_id}"),
        });
    }
    if supplier_id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("supplier id must be positive, got {supplier_id}"),
        });
    }
    if quantity <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("supply quantity must be positive, got {quantity}"),
        });
    }

    let supply = supply::ActiveModel {
        product_id: Set(product_id),
        supplier_id: Set(supplier_id),
        supply_date: Set(supply_date),
        quantity: Set(quantity),
        ..Default::default()
    };
    supply.insert(db).await.map_err(Into::into)
}

/// Updates an existing supply, replacing every field.
///
/// # Errors
/// Returns `Error::InvalidArgument` on bad input, or
/// `Error::InvalidOperation` if no supply with `id` exists.
pub async fn update_supply(
    db: &DatabaseConnection,
    id: i32,
    product_id: i32,
    supplier_id: i32,
    supply_date: Date,
    quantity: i32,
) -> Result<supply::Model> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("supply id must be positive, got {id}"),
        });
    }
    if product_id <= 0 || supplier_id <= 0 {
        return Err(Error::InvalidArgument {
            message: "supply references must be positive".to_string(),
        });
    }
    if quantity <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("supply quantity must be positive, got {quantity}"),
        });
    }

    let existing = Supply::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InvalidOperation {
            message: format!("supply with id {id} does not exist"),
        })?;

    let mut supply: supply::ActiveModel = existing.into();
    supply.product_id = Set(product_id);
    supply.supplier_id = Set(supplier_id);
    supply.supply_date = Set(supply_date);
    supply.quantity = Set(quantity);
    supply.update(db).await.map_err(Into::into)
}

/// Deletes a supply by id.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `id <= 0`, or
/// `Error::InvalidOperation` if no such supply exists.
pub async fn delete_supply(db: &DatabaseConnection, id: i32) -> Result<()> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("supply id must be positive, got {id}"),
        });
    }

    let existing = Supply::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InvalidOperation {
            message: format!("supply with id {id} does not exist"),
        })?;

    existing.delete(db).await?;
    Ok(())
}

/// Retrieves all supplies delivering one product, ordered by supply date.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `product_id <= 0`.
pub async fn get_supplies_for_product(
    db: &DatabaseConnection,
    product_id: i32,
) -> Result<Vec<supply::Model>> {
    if product_id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("product id must be positive, got {product_id}"),
        });
    }
    Supply::find()
        .filter(supply::Column::ProductId.eq(product_id))
        .order_by_asc(supply::Column::SupplyDate)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_product, create_test_supplier, date, setup_test_db};

    #[tokio::test]
    async fn test_supply_crud_round_trip() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        let product = create_test_product(&db, "Canned Beans").await?;
        let supplier = create_test_supplier(&db).await?;

        let created =
            create_supply(&db, product.id, supplier.id, date(2024, 1, 10), 100).await?;

        let updated = update_supply(
            &db,
            created.id,
            product.id,
            supplier.id,
            date(2024, 1, 11),
            150,
        )
        .await?;
        assert_eq!(updated.quantity, 150);
        assert_eq!(updated.supply_date, date(2024, 1, 11));

        let for_product = get_supplies_for_product(&db, product.id).await?;
        assert_eq!(for_product.len(), 1);

        delete_supply(&db, created.id).await?;
        assert!(get_supply_by_id(&db, created.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_supply_validation() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;

        let result = create_supply(&db, 0, 1, date(2024, 1, 10), 100).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidArgument { message: _ }
        ));

        let result = create_supply(&db, 1, 1, date(2024, 1, 10), 0).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidArgument { message: _ }
        ));

        Ok(())
    }
}
