//! Supplier repository - CRUD and filter operations over supplier companies.

use crate::{
    entities::{Supplier, supplier},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, Set, prelude::*};

/// Retrieves all suppliers, ordered alphabetically by company name.
pub async fn get_all_suppliers(db: &DatabaseConnection) -> Result<Vec<supplier::Model>> {
    Supplier::find()
        .order_by_asc(supplier::Column::CompanyName)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific supplier by id, or None when absent.
pub async fn get_supplier_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<supplier::Model>> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("supplier id must be positive, got {id}"),
        });
    }
    Supplier::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Creates a new supplier.
pub async fn create_supplier(
    db: &DatabaseConnection,
    company_name: String,
    contact_person: String,
    phone: String,
    address: String,
) -> Result<supplier::Model> {
    if company_name.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "supplier company name cannot be empty".to_string(),
        });
    }

    let supplier = supplier::ActiveModel {
        company_name: Set(company_name.trim().to_string()),
        contact_person: Set(contact_person),
        phone: Set(phone),
        address: Set(address),
        ..Default::default()
    };
    supplier.insert(db).await.map_err(Into::into)
}

/// Updates an existing supplier, replacing every field.
pub async fn update_supplier(
    db: &DatabaseConnection,
    id: i32,
    company_name: String,
    contact_person: String,
    phone: String,
    address: String,
) -> Result<supplier::Model> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("supplier id must be positive, got {id}"),
        });
    }
    if company_name.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "supplier company name cannot be empty".to_string(),
        });
    }

    let existing = Supplier::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InvalidOperation {
            message: format!("supplier with id {id} does not exist"),
        })?;

    let mut supplier: supplier::ActiveModel = existing.into();
    supplier.company_name = Set(company_name.trim().to_string());
    supplier.contact_person = Set(contact_person);
    supplier.phone = Set(phone);
    supplier.address = Set(address);
    supplier.update(db).await.map_err(Into::into)
}

/// Deletes a supplier by id.
pub async fn delete_supplier(db: &DatabaseConnection, id: i32) -> Result<()> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("supplier id must be positive, got {id}"),
        });
    }

    let existing = Supplier::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InvalidOperation {
            message: format!("supplier with id {id} does not exist"),
        })?;

    existing.delete(db).await?;
    Ok(())
}

/// Case-insensitively filters suppliers whose company name, contact person,
/// or address contains the search text.
pub async fn find_suppliers_matching(
    db: &DatabaseConnection,
    search_text: &str,
) -> Result<Vec<supplier::Model>> {
    Supplier::find()
        .filter(
            Condition::any()
                .add(supplier::Column::CompanyName.contains(search_text))
                .add(supplier::Column::ContactPerson.contains(search_text))
                .add(supplier::Column::Address.contains(search_text)),
        )
        .order_by_asc(supplier::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_supplier_crud_round_trip() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;

        let created = create_supplier(
            &db,
            "Acme Logistics".to_string(),
            "R. Ortiz".to_string(),
            "+1-555-0100".to_string(),
            "7 Pier Street".to_string(),
        )
        .await?;

        let updated = update_supplier(
            &db,
            created.id,
            "Acme Logistics".to_string(),
            "L. Moreau".to_string(),
            "+1-555-0101".to_string(),
            "7 Pier Street".to_string(),
        )
        .await?;
        assert_eq!(updated.contact_person, "L. Moreau");

        let matching = find_suppliers_matching(&db, "pier").await?;
        assert_eq!(matching.len(), 1);

        delete_supplier(&db, created.id).await?;
        assert!(get_supplier_by_id(&db, created.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_supplier() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;

        let result = update_supplier(
            &db,
            12,
            "Acme Logistics".to_string(),
            "R. Ortiz".to_string(),
            "+1-555-0100".to_string(),
            "7 Pier Street".to_string(),
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidOperation { message: _ }
        ));

        Ok(())
    }
}
