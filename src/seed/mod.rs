//! Idempotent database seeding
//!
//! Inserts the default administrator account and the default language record
//! into an empty database. Collections that already contain a document are
//! left untouched, so re-running the tool is harmless.

mod store;

pub use store::{MongoSeedStore, SeedStore};

use chrono::Utc;
use tracing::info;

use crate::auth::hash_password;
use crate::config::Args;
use crate::db::schemas::{LanguageDoc, UserDoc};
use crate::types::Result;

/// Stock bcrypt hash of "123456", used when no ADMIN_PASSWORD is supplied
pub const DEFAULT_ADMIN_PASSWORD_HASH: &str =
    "$2a$12$rdX7N6gpAzKJ/7DzCMyVdeRaTUv6faL6GxhTODzlJcuDHRf4hedoO";

/// Resolved seed values
#[derive(Debug, Clone)]
pub struct SeedDefaults {
    pub admin_username: String,
    pub admin_email: String,
    pub admin_password_hash: String,
    pub language_title: String,
    pub language_locale: String,
}

impl SeedDefaults {
    /// Resolve seed values from configuration, hashing the password override
    /// if one was supplied
    pub fn from_args(args: &Args) -> Result<Self> {
        let admin_password_hash = match args.admin_password {
            Some(ref password) => hash_password(password)?,
            None => DEFAULT_ADMIN_PASSWORD_HASH.to_string(),
        };

        Ok(Self {
            admin_username: args.admin_username.clone(),
            admin_email: args.admin_email.clone(),
            admin_password_hash,
            language_title: args.language_title.clone(),
            language_locale: args.language_locale.clone(),
        })
    }
}

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedReport {
    /// Whether this run inserted the administrator account
    pub admin_created: bool,
    /// Whether this run inserted the default language
    pub language_created: bool,
}

/// Run the two guarded inserts.
///
/// Each collection is seeded only if it contains no document at all; the
/// insert itself is an upsert on the record's natural key, so a concurrent
/// run cannot double-insert.
pub async fn run(store: &impl SeedStore, defaults: &SeedDefaults) -> Result<SeedReport> {
    let now = Utc::now().timestamp();
    let mut report = SeedReport::default();

    if store.has_users().await? {
        info!("User collection is not empty, skipping administrator seed");
    } else {
        let admin = UserDoc::default_admin(
            &defaults.admin_username,
            &defaults.admin_email,
            &defaults.admin_password_hash,
            now,
        );
        report.admin_created = store.insert_user(admin).await?;

        if report.admin_created {
            info!(username = %defaults.admin_username, "Inserted default administrator account");
        } else {
            info!("Administrator account was inserted concurrently, nothing to do");
        }
    }

    if store.has_languages().await? {
        info!("Language collection is not empty, skipping language seed");
    } else {
        let language = LanguageDoc::new(&defaults.language_title, &defaults.language_locale, now);
        report.language_created = store.insert_language(language).await?;

        if report.language_created {
            info!(locale = %defaults.language_locale, "Inserted default language");
        } else {
            info!("Default language was inserted concurrently, nothing to do");
        }
    }

    Ok(report)
}
