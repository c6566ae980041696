//! MongoDB user store adapter - the record of truth.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{Client, Collection};

use userstore_core::domain::{File, User};
use userstore_core::error::StoreError;
use userstore_core::ports::UserStore;

use super::document::UserDocument;

/// MongoDB connection settings.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

/// `UserStore` backed by a MongoDB collection keyed on email (`_id`).
#[derive(Clone)]
pub struct MongoUserStore {
    users: Collection<UserDocument>,
}

impl MongoUserStore {
    /// Connect and verify the connection with a round trip.
    pub async fn connect(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        tracing::info!(database = %config.database, "Connecting to MongoDB");

        let client = Client::with_uri_str(&config.uri).await?;
        let db = client.database(&config.database);
        db.list_collection_names().await?;

        tracing::info!(database = %config.database, "MongoDB connection established");

        Ok(Self {
            users: db.collection::<UserDocument>("users"),
        })
    }

    async fn fetch(&self, id: &str) -> Result<UserDocument, StoreError> {
        self.users
            .find_one(doc! { "_id": id })
            .await
            .map_err(backend)?
            .ok_or(StoreError::NotFound)
    }

    /// Whole-record write-back half of the read-modify-write file
    /// mutations. Racy under concurrent writers to the same user; see
    /// the `UserStore` port docs.
    async fn replace(&self, doc: UserDocument) -> Result<(), StoreError> {
        self.users
            .replace_one(doc! { "_id": &doc.email }, &doc)
            .await
            .map_err(backend)?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let docs: Vec<UserDocument> = self
            .users
            .find(doc! {})
            .await
            .map_err(backend)?
            .try_collect()
            .await
            .map_err(backend)?;

        Ok(docs.into_iter().map(Into::into).collect())
    }

    async fn get_user(&self, id: &str) -> Result<User, StoreError> {
        self.fetch(id).await.map(Into::into)
    }

    async fn create_user(&self, user: User) -> Result<(), StoreError> {
        let doc = UserDocument::from(user);
        self.users.insert_one(&doc).await.map_err(|e| {
            if is_duplicate_key(&e) {
                StoreError::Duplicate(doc.email.clone())
            } else {
                backend(e)
            }
        })?;
        Ok(())
    }

    async fn update_user(&self, user: User) -> Result<(), StoreError> {
        // Matching zero documents is a non-error outcome.
        self.replace(user.into()).await
    }

    async fn delete_user(&self, id: &str) -> Result<(), StoreError> {
        self.users
            .delete_one(doc! { "_id": id })
            .await
            .map_err(backend)?;
        Ok(())
    }

    async fn add_file(&self, id: &str, file: File) -> Result<(), StoreError> {
        let mut doc = self.fetch(id).await?;
        doc.files.push(file.into());
        self.replace(doc).await
    }

    async fn clear_files(&self, id: &str) -> Result<(), StoreError> {
        let mut doc = self.fetch(id).await?;
        doc.files.clear();
        self.replace(doc).await
    }

    async fn get_files(&self, id: &str) -> Result<Vec<File>, StoreError> {
        let doc = self.fetch(id).await?;
        Ok(doc.files.into_iter().map(Into::into).collect())
    }
}

fn backend(err: mongodb::error::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    // Server error code for a unique index violation.
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref we)) if we.code == 11000
    )
}
