//! Employee repository - CRUD and filter operations over warehouse staff.
//!
//! These operations enforce only local shape checks (positive ids, non-empty
//! names) and the existence of the row being changed; cross-entity rules
//! live in the accounting engine.

use crate::{
    entities::{Employee, employee},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, Set, prelude::*};

/// Retrieves all employees, ordered alphabetically by full name.
pub async fn get_all_employees(db: &DatabaseConnection) -> Result<Vec<employee::Model>> {
    Employee::find()
        .order_by_asc(employee::Column::FullName)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific employee by id, or None when absent.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `id <= 0`.
pub async fn get_employee_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<employee::Model>> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("employee id must be positive, got {id}"),
        });
    }
    Employee::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Creates a new employee, performing input validation.
///
/// The full name and position must be non-empty; surrounding whitespace is
/// trimmed before storing.
pub async fn create_employee(
    db: &DatabaseConnection,
    full_name: String,
    position: String,
    phone: Option<String>,
) -> Result<employee::Model> {
    if full_name.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "employee full name cannot be empty".to_string(),
        });
    }
    if position.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "employee position cannot be empty".to_string(),
        });
    }

    let employee = employee::ActiveModel {
        full_name: Set(full_name.trim().to_string()),
        position: Set(position.trim().to_string()),
        phone: Set(phone),
        ..Default::default()
    };
    employee.insert(db).await.map_err(Into::into)
}

/// Updates an existing employee, replacing every field.
///
/// # Errors
/// Returns `Error::InvalidArgument` on bad input, or
/// `Error::InvalidOperation` if no employee with `id` exists.
pub async fn update_employee(
    db: &DatabaseConnection,
    id: i32,
    full_name: String,
    position: String,
    phone: Option<String>,
) -> Result<employee::Model> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("employee id must be positive, got {id}"),
        });
    }
    if full_name.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "employee full name cannot be empty".to_string(),
        });
    }
    if position.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "employee position cannot be empty".to_string(),
        });
    }

    let existing = Employee::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InvalidOperation {
            message: format!("employee with id {id} does not exist"),
        })?;

    let mut employee: employee::ActiveModel = existing.into();
    employee.full_name = Set(full_name.trim().to_string());
    employee.position = Set(position.trim().to_string());
    employee.phone = Set(phone);
    employee.update(db).await.map_err(Into::into)
}

/// Deletes an employee by id.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `id <= 0`, or
/// `Error::InvalidOperation` if no such employee exists.
pub async fn delete_employee(db: &DatabaseConnection, id: i32) -> Result<()> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("employee id must be positive, got {id}"),
        });
    }

    let existing = Employee::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InvalidOperation {
            message: format!("employee with id {id} does not exist"),
        })?;

    existing.delete(db).await?;
    Ok(())
}

/// Case-insensitively filters employees whose name, position, or phone
/// contains the search text. An empty result is valid.
pub async fn find_employees_matching(
    db: &DatabaseConnection,
    search_text: &str,
) -> Result<Vec<employee::Model>> {
    Employee::find()
        .filter(
            Condition::any()
                .add(employee::Column::FullName.contains(search_text))
                .add(employee::Column::Position.contains(search_text))
                .add(employee::Column::Phone.contains(search_text)),
        )
        .order_by_asc(employee::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_employee_validation() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_employee(&db, String::new(), "storekeeper".to_string(), None).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidArgument { message: _ }
        ));

        let result = create_employee(&db, "Mira Kovac".to_string(), "   ".to_string(), None).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidArgument { message: _ }
        ));
    }

    #[tokio::test]
    async fn test_employee_crud_round_trip() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;

        let created = create_employee(
            &db,
            "  Mira Kovac ".to_string(),
            "storekeeper".to_string(),
            Some("+1-555-0114".to_string()),
        )
        .await?;
        assert_eq!(created.full_name, "Mira Kovac");

        let fetched = get_employee_by_id(&db, created.id).await?.unwrap();
        assert_eq!(fetched, created);

        let updated = update_employee(
            &db,
            created.id,
            "Mira Kovac".to_string(),
            "shift supervisor".to_string(),
            None,
        )
        .await?;
        assert_eq!(updated.position, "shift supervisor");
        assert_eq!(updated.phone, None);

        delete_employee(&db, created.id).await?;
        assert!(get_employee_by_id(&db, created.id).await?.is_none());

        let result = delete_employee(&db, created.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidOperation { message: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_find_employees_matching() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;

        create_employee(&db, "Mira Kovac".to_string(), "storekeeper".to_string(), None).await?;
        create_employee(
            &db,
            "Pavel Sorin".to_string(),
            "shift supervisor".to_string(),
            None,
        )
        .await?;

        let matching = find_employees_matching(&db, "kovac").await?;
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].full_name, "Mira Kovac");

        let matching = find_employees_matching(&db, "supervisor").await?;
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].full_name, "Pavel Sorin");

        let matching = find_employees_matching(&db, "nobody").await?;
        assert!(matching.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_employee_by_id_rejects_non_positive() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();
        assert!(get_employee_by_id(&db, 0).await.is_err());
        assert!(get_employee_by_id(&db, -7).await.is_err());
    }
}
