//! Error types for gofreta-seed

use thiserror::Error;

/// Errors produced while seeding the database
#[derive(Debug, Error)]
pub enum SeedError {
    /// MongoDB connection or operation failure
    #[error("database error: {0}")]
    Database(String),

    /// Password hashing failure
    #[error("password error: {0}")]
    Password(String),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SeedError>;
