//! Language document schema

use bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::db::mongo::IntoIndexes;

/// Collection name for languages
pub const LANGUAGE_COLLECTION: &str = "language";

/// Language document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LanguageDoc {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Display name, e.g. "English"
    pub title: String,

    /// Locale code, e.g. "en"
    pub locale: String,

    /// Creation time, Unix seconds
    pub created: i64,

    /// Last modification time, Unix seconds
    pub modified: i64,
}

impl LanguageDoc {
    /// Create a new language document
    pub fn new(title: &str, locale: &str, now: i64) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            locale: locale.to_string(),
            created: now,
            modified: now,
        }
    }
}

impl IntoIndexes for LanguageDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![(
            doc! { "locale": 1 },
            Some(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name("locale_unique".to_string())
                    .build(),
            ),
        )]
    }
}
