//! Storage zone repository - CRUD and filter operations over warehouse zones.

use crate::{
    entities::{StorageZone, storage_zone},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, Set, prelude::*};

/// Retrieves all storage zones, ordered by warehouse and zone name.
pub async fn get_all_storage_zones(db: &DatabaseConnection) -> Result<Vec<storage_zone::Model>> {
    StorageZone::find()
        .order_by_asc(storage_zone::Column::WarehouseId)
        .order_by_asc(storage_zone::Column::ZoneName)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific storage zone by id, or None when absent.
pub async fn get_storage_zone_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<storage_zone::Model>> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("storage zone id must be positive, got {id}"),
        });
    }
    StorageZone::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Creates a new storage zone inside a warehouse.
pub async fn create_storage_zone(
    db: &DatabaseConnection,
    warehouse_id: i32,
    zone_name: String,
    zone_type: String,
    capacity: i32,
) -> Result<storage_zone::Model> {
    if warehouse_id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("warehouse id must be positive, got {warehouse_id}"),
        });
    }
    if zone_name.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "zone name cannot be empty".to_string(),
        });
    }
    if capacity <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("zone capacity must be positive, got {capacity}"),
        });
    }

    let zone = storage_zone::ActiveModel {
        warehouse_id: Set(warehouse_id),
        zone_name: Set(zone_name.trim().to_string()),
        zone_type: Set(zone_type),
        capacity: Set(capacity),
        ..Default::default()
    };
    zone.insert(db).await.map_err(Into::into)
}

/// Updates an existing storage zone, replacing every field.
pub async fn update_storage_zone(
    db: &DatabaseConnection,
    id: i32,
    warehouse_id: i32,
    zone_name: String,
    zone_type: String,
    capacity: i32,
) -> Result<storage_zone::Model> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("storage zone id must be positive, got {id}"),
        });
    }
    if warehouse_id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("warehouse id must be positive, got {warehouse_id}"),
        });
    }
    if zone_name.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "zone name cannot be empty".to_string(),
        });
    }
    if capacity <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("zone capacity must be positive, got {capacity}"),
        });
    }

    let existing = StorageZone::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InvalidOperation {
            message: format!("storage zone with id {id} does not exist"),
        })?;

    let mut zone: storage_zone::ActiveModel = existing.into();
    zone.warehouse_id = Set(warehouse_id);
    zone.zone_name = Set(zone_name.trim().to_string());
    zone.zone_type = Set(zone_type);
    zone.capacity = Set(capacity);
    zone.update(db).await.map_err(Into::into)
}

/// Deletes a storage zone by id.
pub async fn delete_storage_zone(db: &DatabaseConnection, id: i32) -> Result<()> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("storage zone id must be positive, got {id}"),
        });
    }

    let existing = StorageZone::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InvalidOperation {
            message: format!("storage zone with id {id} does not exist"),
        })?;

    existing.delete(db).await?;
    Ok(())
}

/// Case-insensitively filters storage zones whose name or type contains the
/// search text.
pub async fn find_storage_zones_matching(
    db: &DatabaseConnection,
    search_text: &str,
) -> Result<Vec<storage_zone::Model>> {
    StorageZone::find()
        .filter(
            Condition::any()
                .add(storage_zone::Column::ZoneName.contains(search_text))
                .add(storage_zone::Column::ZoneType.contains(search_text)),
        )
        .order_by_asc(storage_zone::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_warehouse, setup_test_db};

    #[tokio::test]
    async fn test_storage_zone_crud_round_trip() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        let warehouse = create_test_warehouse(&db, "Central").await?;

        let created = create_storage_zone(
            &db,
            warehouse.id,
            "A-1".to_string(),
            "dry".to_string(),
            500,
        )
        .await?;

        let updated = update_storage_zone(
            &db,
            created.id,
            warehouse.id,
            "A-1".to_string(),
            "cold".to_string(),
            250,
        )
        .await?;
        assert_eq!(updated.zone_type, "cold");
        assert_eq!(updated.capacity, 250);

        let matching = find_storage_zones_matching(&db, "cold").await?;
        assert_eq!(matching.len(), 1);

        delete_storage_zone(&db, created.id).await?;
        assert!(get_storage_zone_by_id(&db, created.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_storage_zone_validation() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;

        let result =
            create_storage_zone(&db, 0, "A-1".to_string(), "dry".to_string(), 500).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidArgument { message: _ }
        ));

        let result =
            create_storage_zone(&db, 1, "  ".to_string(), "dry".to_string(), 500).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidArgument { message: _ }
        ));

        let result =
            create_storage_zone(&db, 1, "A-1".to_string(), "dry".to_string(), 0).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidArgument { message: _ }
        ));

        Ok(())
    }
}
