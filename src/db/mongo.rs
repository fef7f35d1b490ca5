//! MongoDB client and collection wrapper

use bson::{doc, Document};
use mongodb::{options::IndexOptions, Client, Collection, IndexModel};
use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use crate::types::SeedError;

/// Trait for schemas that provide index definitions
pub trait IntoIndexes {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)>;
}

/// MongoDB client wrapper
#[derive(Clone)]
pub struct MongoClient {
    client: Client,
    db_name: String,
}

impl MongoClient {
    /// Create a new MongoDB client and verify the server is reachable
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, SeedError> {
        info!("Connecting to MongoDB at {}", uri);

        // Use serverSelectionTimeoutMS to avoid hanging on unreachable MongoDB
        let timeout_uri = if uri.contains('?') {
            format!("{}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        } else {
            format!("{}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        };

        let client = Client::with_uri_str(&timeout_uri)
            .await
            .map_err(|e| SeedError::Database(format!("Failed to connect to MongoDB: {}", e)))?;

        // Verify connection with timeout
        client
            .database(db_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| SeedError::Database(format!("MongoDB ping failed: {}", e)))?;

        info!("Connected to MongoDB database '{}'", db_name);

        Ok(Self {
            client,
            db_name: db_name.to_string(),
        })
    }

    /// Get a typed collection
    pub async fn collection<T>(&self, name: &str) -> Result<MongoCollection<T>, SeedError>
    where
        T: Serialize + DeserializeOwned + Unpin + Send + Sync + IntoIndexes,
    {
        MongoCollection::new(&self.client, &self.db_name, name).await
    }

}

/// Typed MongoDB collection with automatic indexing
#[derive(Debug, Clone)]
pub struct MongoCollection<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    inner: Collection<T>,
}

impl<T> MongoCollection<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync + IntoIndexes,
{
    /// Create a new collection and apply indexes
    pub async fn new(
        client: &Client,
        db_name: &str,
        collection_name: &str,
    ) -> Result<Self, SeedError> {
        let collection = client.database(db_name).collection::<T>(collection_name);
        let mongo_collection = MongoCollection { inner: collection };

        // Apply indexes
        mongo_collection.apply_indexes().await?;

        Ok(mongo_collection)
    }

    /// Apply schema-defined indexes
    async fn apply_indexes(&self) -> Result<(), SeedError> {
        let schema_indices = T::into_indices();

        if schema_indices.is_empty() {
            return Ok(());
        }

        let indices: Vec<IndexModel> = schema_indices
            .into_iter()
            .map(|(keys, opts)| IndexModel::builder().keys(keys).options(opts).build())
            .collect();

        self.inner
            .create_indexes(indices)
            .await
            .map_err(|e| SeedError::Database(format!("Failed to create indexes: {}", e)))?;

        Ok(())
    }

    /// Check whether the collection contains no documents at all
    pub async fn is_empty(&self) -> Result<bool, SeedError> {
        let count = self
            .inner
            .count_documents(doc! {})
            .await
            .map_err(|e| SeedError::Database(format!("Count failed: {}", e)))?;

        Ok(count == 0)
    }

    /// Insert a document unless one already matches the filter.
    ///
    /// Implemented as an upsert with `$setOnInsert`, so a concurrent run
    /// racing on the same natural key cannot create a duplicate. Returns true
    /// if this call inserted the document.
    pub async fn insert_if_absent(&self, filter: Document, item: &T) -> Result<bool, SeedError> {
        let body = bson::to_document(item)
            .map_err(|e| SeedError::Database(format!("Failed to serialize document: {}", e)))?;

        let result = self
            .inner
            .clone_with_type::<Document>()
            .update_one(filter, doc! { "$setOnInsert": body })
            .upsert(true)
            .await
            .map_err(|e| SeedError::Database(format!("Insert failed: {}", e)))?;

        Ok(result.upserted_id.is_some())
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require a running MongoDB instance;
    // the seeding logic itself is covered in seed::tests against an
    // in-memory store.
}
