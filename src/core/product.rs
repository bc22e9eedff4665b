//! Product repository - CRUD and filter operations over the product catalog.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, Set, prelude::*};

/// Retrieves all products, ordered alphabetically by name.
pub async fn get_all_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by id, or None when absent.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `id <= 0`.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<product::Model>> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("product id must be positive, got {id}"),
        });
    }
    Product::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Creates a new product. New products start active and without a photo.
pub async fn create_product(
    db: &DatabaseConnection,
    name: String,
    product_type: String,
    expiry_date: Option<Date>,
) -> Result<product::Model> {
    if name.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "product name cannot be empty".to_string(),
        });
    }
    if product_type.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "product type cannot be empty".to_string(),
        });
    }

    let product = product::ActiveModel {
        name: Set(name.trim().to_string()),
        product_type: Set(product_type.trim().to_string()),
        expiry_date: Set(expiry_date),
        is_active: Set(true),
        photo: Set(None),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Updates an existing product, replacing every field.
///
/// # Errors
/// Returns `Error::InvalidArgument` on bad input, or
/// `Error::InvalidOperation` if no product with `id` exists.
pub async fn update_product(
    db: &DatabaseConnection,
    id: i32,
    name: String,
    product_type: String,
    expiry_date: Option<Date>,
    is_active: bool,
    photo: Option<Vec<u8>>,
) -> Result<product::Model> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("product id must be positive, got {id}"),
        });
    }
    if name.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "product name cannot be empty".to_string(),
        });
    }
    if product_type.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "product type cannot be empty".to_string(),
        });
    }

    let existing = Product::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InvalidOperation {
            message: format!("product with id {id} does not exist"),
        })?;

    let mut product: product::ActiveModel = existing.into();
    product.name = Set(name.trim().to_string());
    product.product_type = Set(product_type.trim().to_string());
    product.expiry_date = Set(expiry_date);
    product.is_active = Set(is_active);
    product.photo = Set(photo);
    product.update(db).await.map_err(Into::into)
}

/// Deletes a product by id.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `id <= 0`, or
/// `Error::InvalidOperation` if no such product exists.
pub async fn delete_product(db: &DatabaseConnection, id: i32) -> Result<()> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("product id must be positive, got {id}"),
        });
    }

    let existing = Product::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InvalidOperation {
            message: format!("product with id {id} does not exist"),
        })?;

    existing.delete(db).await?;
    Ok(())
}

/// Case-insensitively filters products whose name or type contains the
/// search text.
pub async fn find_products_matching(
    db: &DatabaseConnection,
    search_text: &str,
) -> Result<Vec<product::Model>> {
    Product::find()
        .filter(
            Condition::any()
                .add(product::Column::Name.contains(search_text))
                .add(product::Column::ProductType.contains(search_text)),
        )
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
