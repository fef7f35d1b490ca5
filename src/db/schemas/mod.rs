//! Database schemas for gofreta-seed
//!
//! Defines the MongoDB document structures seeded by this tool.

mod language;
mod user;

pub use language::{LanguageDoc, LANGUAGE_COLLECTION};
pub use user::{default_access, UserDoc, USER_COLLECTION, USER_STATUS_ACTIVE};
