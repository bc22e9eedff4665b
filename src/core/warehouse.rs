//! Warehouse repository - CRUD operations and layout seeding.
//!
//! Besides the uniform repository operations, this module seeds the initial
//! warehouse layout (warehouses plus their storage zones) from the parsed
//! config.toml, inserting only what is missing so repeated runs are safe.

use crate::{
    config::layout::Config,
    entities::{StorageZone, Warehouse, storage_zone, warehouse},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{debug, info, instrument};

/// Retrieves all warehouses, ordered alphabetically by name.
pub async fn get_all_warehouses(db: &DatabaseConnection) -> Result<Vec<warehouse::Model>> {
    Warehouse::find()
        .order_by_asc(warehouse::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific warehouse by id, or None when absent.
pub async fn get_warehouse_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<warehouse::Model>> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("warehouse id must be positive, got {id}"),
        });
    }
    Warehouse::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Creates a new warehouse.
pub async fn create_warehouse(
    db: &DatabaseConnection,
    name: String,
    address: String,
) -> Result<warehouse::Model> {
    if name.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "warehouse name cannot be empty".to_string(),
        });
    }

    let warehouse = warehouse::ActiveModel {
        name: Set(name.trim().to_string()),
        address: Set(address),
        ..Default::default()
    };
    warehouse.insert(db).await.map_err(Into::into)
}

/// Updates an existing warehouse, replacing every field.
pub async fn update_warehouse(
    db: &DatabaseConnection,
    id: i32,
    name: String,
    address: String,
) -> Result<warehouse::Model> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("warehouse id must be positive, got {id}"),
        });
    }
    if name.trim().is_empty() {
        return Err(Error::InvalidArgument {
            message: "warehouse name cannot be empty".to_string(),
        });
    }

    let existing = Warehouse::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InvalidOperation {
            message: format!("warehouse with id {id} does not exist"),
        })?;

    let mut warehouse: warehouse::ActiveModel = existing.into();
    warehouse.name = Set(name.trim().to_string());
    warehouse.address = Set(address);
    warehouse.update(db).await.map_err(Into::into)
}

/// Deletes a warehouse by id.
pub async fn delete_warehouse(db: &DatabaseConnection, id: i32) -> Result<()> {
    if id <= 0 {
        return Err(Error::InvalidArgument {
            message: format!("warehouse id must be positive, got {id}"),
        });
    }

    let existing = Warehouse::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InvalidOperation {
            message: format!("warehouse with id {id} does not exist"),
        })?;

    existing.delete(db).await?;
    Ok(())
}

/// Case-insensitively filters warehouses whose name or address contains the
/// search text.
pub async fn find_warehouses_matching(
    db: &DatabaseConnection,
    search_text: &str,
) -> Result<Vec<warehouse::Model>> {
    Warehouse::find()
        .filter(
            Condition::any()
                .add(warehouse::Column::Name.contains(search_text))
                .add(warehouse::Column::Address.contains(search_text)),
        )
        .order_by_asc(warehouse::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Seeds the warehouse layout from configuration, inside one transaction.
///
/// Warehouses are matched by name and zones by name within their warehouse;
/// anything already present is left untouched, so the seeding is idempotent.
#[instrument(skip(db, config))]
pub async fn seed_initial_layout(db: &DatabaseConnection, config: &Config) -> Result<()> {
    info!(
        "Seeding warehouse layout: {} warehouse(s) configured",
        config.warehouses.len()
    );
    let txn = db.begin().await?;

    for warehouse_config in &config.warehouses {
        debug!("Processing warehouse '{}'", warehouse_config.name);

        let existing = Warehouse::find()
            .filter(warehouse::Column::Name.eq(&warehouse_config.name))
            .one(&txn)
            .await?;

        let warehouse_id = match existing {
            Some(warehouse) => {
                debug!("Warehouse '{}' already present", warehouse.name);
                warehouse.id
            }
            None => {
                let inserted = warehouse::ActiveModel {
                    name: Set(warehouse_config.name.clone()),
                    address: Set(warehouse_config.address.clone()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                info!("Seeded warehouse '{}'", inserted.name);
                inserted.id
            }
        };

        for zone_config in &warehouse_config.zones {
            let zone_present = StorageZone::find()
                .filter(storage_zone::Column::WarehouseId.eq(warehouse_id))
                .filter(storage_zone::Column::ZoneName.eq(&zone_config.zone_name))
                .one(&txn)
                .await?
                .is_some();
            if zone_present {
                debug!("Zone '{}' already present, skipping", zone_config.zone_name);
                continue;
            }

            storage_zone::ActiveModel {
                warehouse_id: Set(warehouse_id),
                zone_name: Set(zone_config.zone_name.clone()),
                zone_type: Set(zone_config.zone_type.clone()),
                capacity: Set(zone_config.capacity),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            info!("Seeded zone '{}'", zone_config.zone_name);
        }
    }

    txn.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::storage_zone::get_all_storage_zones;
    use crate::test_utils::setup_test_db;

    fn layout_fixture() -> Config {
        toml::from_str(
            r#"
            [[warehouses]]
            name = "Central"
            address = "12 Dock Road"

            [[warehouses.zones]]
            zone_name = "A-1"
            zone_type = "dry"
            capacity = 500

            [[warehouses.zones]]
            zone_name = "A-2"
            zone_type = "cold"
            capacity = 200
        "#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_warehouse_crud_round_trip() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;

        let created =
            create_warehouse(&db, "Central".to_string(), "12 Dock Road".to_string()).await?;

        let updated = update_warehouse(
            &db,
            created.id,
            "Central".to_string(),
            "14 Dock Road".to_string(),
        )
        .await?;
        assert_eq!(updated.address, "14 Dock Road");

        let matching = find_warehouses_matching(&db, "dock").await?;
        assert_eq!(matching.len(), 1);

        delete_warehouse(&db, created.id).await?;
        assert!(get_warehouse_by_id(&db, created.id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_initial_layout_is_idempotent() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        let config = layout_fixture();

        seed_initial_layout(&db, &config).await?;
        let warehouses = get_all_warehouses(&db).await?;
        let zones = get_all_storage_zones(&db).await?;
        assert_eq!(warehouses.len(), 1);
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].zone_name, "A-1");
        assert_eq!(zones[1].capacity, 200);

        // Seeding again inserts nothing new
        seed_initial_layout(&db, &config).await?;
        assert_eq!(get_all_warehouses(&db).await?.len(), 1);
        assert_eq!(get_all_storage_zones(&db).await?.len(), 2);

        Ok(())
    }
}
