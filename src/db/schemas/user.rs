//! User document schema
//!
//! Stores the CMS administrator credentials and per-resource access rights.

use std::collections::BTreeMap;

use bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};

use crate::auth::verify_password;
use crate::db::mongo::IntoIndexes;
use crate::types::SeedError;

/// Collection name for users
pub const USER_COLLECTION: &str = "user";

/// Active user status value
pub const USER_STATUS_ACTIVE: &str = "active";

/// User document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserDoc {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Login name
    pub username: String,

    /// Contact email
    pub email: String,

    /// Account status ("active" or "inactive")
    pub status: String,

    /// bcrypt password hash
    pub password_hash: String,

    /// Pending password reset token hash (empty when no reset is in flight)
    #[serde(default)]
    pub reset_password_hash: String,

    /// Resource name -> ordered list of permitted actions
    pub access: BTreeMap<String, Vec<String>>,

    /// Creation time, Unix seconds
    pub created: i64,

    /// Last modification time, Unix seconds
    pub modified: i64,
}

impl UserDoc {
    /// Create the default administrator document with full access rights
    pub fn default_admin(username: &str, email: &str, password_hash: &str, now: i64) -> Self {
        Self {
            id: None,
            username: username.to_string(),
            email: email.to_string(),
            status: USER_STATUS_ACTIVE.to_string(),
            password_hash: password_hash.to_string(),
            reset_password_hash: String::new(),
            access: default_access(),
            created: now,
            modified: now,
        }
    }

    /// Check a plain password against the stored hash
    pub fn validate_password(&self, password: &str) -> Result<bool, SeedError> {
        verify_password(password, &self.password_hash)
    }
}

/// Access map granting the administrator every action on every resource
pub fn default_access() -> BTreeMap<String, Vec<String>> {
    let full = ["index", "view", "create", "update", "delete"];

    let mut access = BTreeMap::new();
    access.insert("user".to_string(), to_actions(&full));
    access.insert("key".to_string(), to_actions(&full));
    access.insert(
        "language".to_string(),
        to_actions(&["create", "update", "delete"]),
    );
    access.insert(
        "media".to_string(),
        to_actions(&["index", "view", "upload", "update", "delete", "replace"]),
    );
    access.insert("collection".to_string(), to_actions(&full));

    access
}

fn to_actions(actions: &[&str]) -> Vec<String> {
    actions.iter().map(|a| a.to_string()).collect()
}

impl IntoIndexes for UserDoc {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)> {
        vec![
            (
                doc! { "username": 1 },
                Some(
                    IndexOptions::builder()
                        .unique(true)
                        .sparse(true)
                        .name("username_unique".to_string())
                        .build(),
                ),
            ),
            (
                doc! { "email": 1 },
                Some(
                    IndexOptions::builder()
                        .unique(true)
                        .sparse(true)
                        .name("email_unique".to_string())
                        .build(),
                ),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_admin_fields() {
        let user = UserDoc::default_admin("admin", "admin@example.com", "$2a$12$hash", 1700000000);

        assert!(user.id.is_none());
        assert_eq!(user.username, "admin");
        assert_eq!(user.email, "admin@example.com");
        assert_eq!(user.status, USER_STATUS_ACTIVE);
        assert_eq!(user.password_hash, "$2a$12$hash");
        assert!(user.reset_password_hash.is_empty());
        assert_eq!(user.created, 1700000000);
        assert_eq!(user.created, user.modified);
    }

    #[test]
    fn test_default_access_covers_all_resources() {
        let access = default_access();

        assert_eq!(access.len(), 5);
        assert_eq!(
            access["user"],
            vec!["index", "view", "create", "update", "delete"]
        );
        assert_eq!(
            access["key"],
            vec!["index", "view", "create", "update", "delete"]
        );
        assert_eq!(access["language"], vec!["create", "update", "delete"]);
        assert_eq!(
            access["media"],
            vec!["index", "view", "upload", "update", "delete", "replace"]
        );
        assert_eq!(
            access["collection"],
            vec!["index", "view", "create", "update", "delete"]
        );
    }

    #[test]
    fn test_serializes_with_bson_field_names() {
        let user = UserDoc::default_admin("admin", "admin@example.com", "h", 1);
        let doc = bson::to_document(&user).unwrap();

        // _id is absent until MongoDB assigns one
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("password_hash").unwrap(), "h");
        assert_eq!(doc.get_str("reset_password_hash").unwrap(), "");
        assert!(doc.get_document("access").unwrap().contains_key("media"));
    }
}
