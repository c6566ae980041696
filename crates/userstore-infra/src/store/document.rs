//! BSON document shape for user records.
//!
//! The domain `User` serializes the HTTP wire shape, so the collection
//! owns its own type here: the identity key is stored as `_id`, which
//! gives the unique index on email for free.

use serde::{Deserialize, Serialize};

use userstore_core::domain::{File, User};

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct UserDocument {
    #[serde(rename = "_id")]
    pub email: String,
    pub username: String,
    pub age: u32,
    pub password: String,
    #[serde(default)]
    pub files: Vec<FileDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct FileDocument {
    pub name: String,
}

impl From<User> for UserDocument {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            username: user.username,
            age: user.age,
            password: user.password,
            files: user.files.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            email: doc.email,
            username: doc.username,
            age: doc.age,
            password: doc.password,
            files: doc.files.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<File> for FileDocument {
    fn from(file: File) -> Self {
        Self { name: file.name }
    }
}

impl From<FileDocument> for File {
    fn from(doc: FileDocument) -> Self {
        Self { name: doc.name }
    }
}
