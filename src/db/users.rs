//! Users repository
//!
//! All access to the `users` collection goes through [`UserRepo`]. The
//! repository owns id and timestamp assignment; email uniqueness is
//! enforced by the index installed in [`UserRepo::ensure_indexes`].

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, DateTime, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};

use super::DbError;
use crate::models::NewUser;

/// Collection holding all user documents.
const COLLECTION: &str = "users";

/// Server error code for unique-index violations.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// User document as stored in the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// Repository for the `users` collection.
#[derive(Clone)]
pub struct UserRepo {
    collection: Collection<UserDoc>,
}

impl UserRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    /// Install the unique index on `email`.
    ///
    /// Must complete before the server accepts requests; without the index
    /// the uniqueness invariant is unenforceable.
    pub async fn ensure_indexes(&self) -> Result<(), DbError> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }

    /// Insert a new user, assigning id and timestamps. Atomic: a rejected
    /// insert leaves nothing behind.
    pub async fn create(&self, new: NewUser) -> Result<UserDoc, DbError> {
        let now = DateTime::now();
        let user = UserDoc {
            id: ObjectId::new(),
            name: new.name,
            email: new.email,
            password: new.password,
            created_at: now,
            updated_at: now,
        };

        self.collection
            .insert_one(&user)
            .await
            .map_err(|err| classify_duplicate(err, &user.email))?;

        Ok(user)
    }

    /// Find all users matching an equality filter. An empty filter matches
    /// every user; order is whatever the server returns.
    pub async fn find(&self, filter: Document) -> Result<Vec<UserDoc>, DbError> {
        let users: Vec<UserDoc> = self.collection.find(filter).await?.try_collect().await?;
        Ok(users)
    }

    /// Replace the supplied fields on the user with the given id, returning
    /// the post-update document, or `None` when no user has that id.
    ///
    /// `updatedAt` is advanced on every call; the caller supplies only the
    /// fields being replaced.
    pub async fn update_by_id(
        &self,
        id: ObjectId,
        mut fields: Document,
    ) -> Result<Option<UserDoc>, DbError> {
        let email = fields.get_str("email").unwrap_or_default().to_owned();
        fields.insert("updatedAt", DateTime::now());

        self.collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|err| classify_duplicate(err, &email))
    }

    /// Delete every user matching the filter, returning the count. An empty
    /// filter deletes all users.
    pub async fn delete_many(&self, filter: Document) -> Result<u64, DbError> {
        let result = self.collection.delete_many(filter).await?;
        Ok(result.deleted_count)
    }
}

/// Recognize unique-index violations and fold them into [`DbError::Duplicate`].
fn classify_duplicate(err: mongodb::error::Error, email: &str) -> DbError {
    let duplicate = match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_err)) => {
            write_err.code == DUPLICATE_KEY_CODE
        }
        // findAndModify reports the violation as a command error.
        ErrorKind::Command(command_err) => command_err.code == DUPLICATE_KEY_CODE,
        _ => false,
    };

    if duplicate {
        DbError::Duplicate {
            field: "email",
            value: email.to_owned(),
        }
    } else {
        DbError::Driver(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect;

    // Integration tests require a running MongoDB.
    // Run with: MONGO_URI=mongodb://... cargo test -- --ignored

    async fn repo() -> UserRepo {
        let uri = std::env::var("MONGO_URI").expect("MONGO_URI required");
        let db = connect(&uri).await.expect("connect failed");
        let repo = UserRepo::new(&db);
        repo.ensure_indexes().await.expect("index creation failed");
        repo
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Test".into(),
            email: email.into(),
            password: "pw".into(),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_assigns_id_and_timestamps() {
        let repo = repo().await;
        let email = format!("{}@example.com", ObjectId::new().to_hex());

        let user = repo.create(new_user(&email)).await.unwrap();
        assert_eq!(user.email, email);
        assert_eq!(user.created_at, user.updated_at);

        repo.delete_many(doc! { "email": email }).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_email_is_rejected() {
        let repo = repo().await;
        let email = format!("{}@example.com", ObjectId::new().to_hex());

        repo.create(new_user(&email)).await.unwrap();
        let err = repo.create(new_user(&email)).await.unwrap_err();
        assert!(matches!(err, DbError::Duplicate { field: "email", .. }));

        // Only one record persists.
        let found = repo.find(doc! { "email": &email }).await.unwrap();
        assert_eq!(found.len(), 1);

        repo.delete_many(doc! { "email": email }).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_missing_id_returns_none() {
        let repo = repo().await;
        let updated = repo
            .update_by_id(ObjectId::new(), doc! { "name": "Nobody" })
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_matching_nothing_counts_zero() {
        let repo = repo().await;
        let count = repo
            .delete_many(doc! { "email": "missing@example.com" })
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
