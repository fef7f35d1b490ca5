//! Seed target storage
//!
//! The `SeedStore` trait keeps the seeding logic independent of the concrete
//! backend so it can run against an in-memory store in tests.

use async_trait::async_trait;
use bson::doc;

use crate::db::schemas::{LanguageDoc, UserDoc, LANGUAGE_COLLECTION, USER_COLLECTION};
use crate::db::{MongoClient, MongoCollection};
use crate::types::Result;

/// Storage backend the seeder runs against
#[async_trait]
pub trait SeedStore: Send + Sync {
    /// Whether the user collection contains any document
    async fn has_users(&self) -> Result<bool>;

    /// Whether the language collection contains any document
    async fn has_languages(&self) -> Result<bool>;

    /// Insert the user unless one with the same username exists.
    /// Returns true if the document was inserted.
    async fn insert_user(&self, user: UserDoc) -> Result<bool>;

    /// Insert the language unless one with the same locale exists.
    /// Returns true if the document was inserted.
    async fn insert_language(&self, language: LanguageDoc) -> Result<bool>;
}

/// MongoDB-backed seed store
pub struct MongoSeedStore {
    users: MongoCollection<UserDoc>,
    languages: MongoCollection<LanguageDoc>,
}

impl MongoSeedStore {
    /// Open the seed collections, creating their indexes
    pub async fn new(mongo: &MongoClient) -> Result<Self> {
        Ok(Self {
            users: mongo.collection(USER_COLLECTION).await?,
            languages: mongo.collection(LANGUAGE_COLLECTION).await?,
        })
    }
}

#[async_trait]
impl SeedStore for MongoSeedStore {
    async fn has_users(&self) -> Result<bool> {
        Ok(!self.users.is_empty().await?)
    }

    async fn has_languages(&self) -> Result<bool> {
        Ok(!self.languages.is_empty().await?)
    }

    async fn insert_user(&self, user: UserDoc) -> Result<bool> {
        self.users
            .insert_if_absent(doc! { "username": &user.username }, &user)
            .await
    }

    async fn insert_language(&self, language: LanguageDoc) -> Result<bool> {
        self.languages
            .insert_if_absent(doc! { "locale": &language.locale }, &language)
            .await
    }
}
