//! gofreta-seed - database seeding tool for the Gofreta headless CMS
//!
//! Seeds a freshly provisioned MongoDB instance with the records a new
//! installation needs to be usable:
//!
//! - a default administrator account in the `user` collection
//! - a default "English" language in the `language` collection
//!
//! Both inserts are guarded on collection emptiness and performed as upserts
//! against a unique index, so the tool is idempotent and safe to re-run.

pub mod auth;
pub mod config;
pub mod db;
pub mod seed;
pub mod types;

pub use config::Args;
pub use seed::{MongoSeedStore, SeedDefaults, SeedReport, SeedStore};
pub use types::{Result, SeedError};
