/// Database configuration and connection management
pub mod database;

/// Warehouse layout seeding from config.toml
pub mod layout;
