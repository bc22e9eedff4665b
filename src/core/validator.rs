//! Existence validation for cross-entity references.
//!
//! Referential integrity of the fact table is enforced here, at the
//! application layer, rather than delegated to the store: every mutating
//! engine call gates its foreign keys through this module before writing.
//! The checks are side-effect-free and accept any connection or open
//! transaction, so a mutation can validate inside its own transaction.

use crate::{
    entities::{Employee, StorageZone, Supply},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, EntityTrait};

/// The entity kinds a product-accounting record may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    /// The employee who recorded the entry
    Employee,
    /// The supply being accounted for
    Supply,
    /// The storage zone holding the goods
    StorageZone,
}

impl Reference {
    /// Human-readable entity name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Supply => "supply",
            Self::StorageZone => "storage zone",
        }
    }

    /// Rejects non-positive candidate ids before any store round-trip.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if `id <= 0`.
    pub fn ensure_positive(self, id: i32) -> Result<()> {
        if id <= 0 {
            return Err(Error::InvalidArgument {
                message: format!("{} id must be positive, got {id}", self.name()),
            });
        }
        Ok(())
    }
}

/// Checks whether the referenced entity exists.
///
/// "Not found" is a valid `false` result, never an error.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `id <= 0`.
pub async fn reference_exists<C: ConnectionTrait>(
    db: &C,
    reference: Reference,
    id: i32,
) -> Result<bool> {
    reference.ensure_positive(id)?;

    let found = match reference {
        Reference::Employee => Employee::find_by_id(id).one(db).await?.is_some(),
        Reference::Supply => Supply::find_by_id(id).one(db).await?.is_some(),
        Reference::StorageZone => StorageZone::find_by_id(id).one(db).await?.is_some(),
    };
    Ok(found)
}

/// Requires the referenced entity to exist before a mutation may proceed.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `id <= 0`, or `Error::InvalidOperation`
/// naming the reference kind and id if no such entity exists.
pub async fn ensure_reference_exists<C: ConnectionTrait>(
    db: &C,
    reference: Reference,
    id: i32,
) -> Result<()> {
    if reference_exists(db, reference, id).await? {
        Ok(())
    } else {
        Err(Error::InvalidOperation {
            message: format!("{} with id {id} does not exist", reference.name()),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{setup_test_db, setup_with_references};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_non_positive_ids_rejected_without_store_access() {
        // No query results configured: a store round-trip would panic the mock
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        for reference in [Reference::Employee, Reference::Supply, Reference::StorageZone] {
            for id in [0, -1, i32::MIN] {
                let result = reference_exists(&db, reference, id).await;
                assert!(matches!(
                    result.unwrap_err(),
                    Error::InvalidArgument { message: _ }
                ));
            }
        }
    }

    #[tokio::test]
    async fn test_reference_exists_integration() -> crate::errors::Result<()> {
        let (db, refs) = setup_with_references().await?;

        assert!(reference_exists(&db, Reference::Employee, refs.employee.id).await?);
        assert!(reference_exists(&db, Reference::Supply, refs.supply.id).await?);
        assert!(reference_exists(&db, Reference::StorageZone, refs.zone.id).await?);

        // Absence is a valid false, not an error
        assert!(!reference_exists(&db, Reference::Employee, refs.employee.id + 100).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_reference_exists_names_the_missing_entity() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;

        let result = ensure_reference_exists(&db, Reference::StorageZone, 41).await;
        match result.unwrap_err() {
            Error::InvalidOperation { message } => {
                assert!(message.contains("storage zone"));
                assert!(message.contains("41"));
            }
            other => panic!("expected InvalidOperation, got {other:?}"),
        }

        Ok(())
    }
}
