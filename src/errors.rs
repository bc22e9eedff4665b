//! Unified error types for the crate.
//!
//! Two error kinds classify caller mistakes: [`Error::InvalidArgument`] for
//! preconditions checkable without touching the store, and
//! [`Error::InvalidOperation`] for preconditions that depend on store state
//! (a missing record or reference). Store failures themselves pass through
//! unclassified as [`Error::Database`].

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied value failed a local, static precondition
    /// (non-positive id, non-positive quantity, future date, ...).
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Which value failed and why
        message: String,
    },

    /// A precondition that depends on store state failed: the target record
    /// or a supplied reference does not exist.
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Which record or reference was missing
        message: String,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    /// Underlying database error, propagated unchanged.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
