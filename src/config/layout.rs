//! Warehouse layout loading from config.toml
//!
//! This module provides functionality to load the initial warehouse layout
//! from a TOML configuration file. The warehouses and storage zones defined
//! in config.toml are used to seed the database on first run or when parts
//! of the layout are missing.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of warehouses to seed, each with its storage zones
    pub warehouses: Vec<WarehouseConfig>,
}

/// Configuration for a single warehouse
#[derive(Debug, Deserialize, Clone)]
pub struct WarehouseConfig {
    /// Warehouse name
    pub name: String,
    /// Street address
    pub address: String,
    /// Storage zones inside this warehouse
    #[serde(default)]
    pub zones: Vec<ZoneConfig>,
}

/// Configuration for a single storage zone
#[derive(Debug, Deserialize, Clone)]
pub struct ZoneConfig {
    /// Zone name, unique within the warehouse
    pub zone_name: String,
    /// Zone classification (e.g., "cold", "dry")
    pub zone_type: String,
    /// Capacity in product units
    pub capacity: i32,
}

/// Loads the warehouse layout from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the warehouse layout from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}
