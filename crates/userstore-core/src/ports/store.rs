use async_trait::async_trait;

use crate::domain::{File, User};
use crate::error::StoreError;

/// Persistence port for user records and their file lists.
///
/// No operation validates its input; callers must have done so. The
/// file mutations (`add_file`, `clear_files`) are read-modify-write at
/// the adapter boundary: the whole record is fetched, the file field is
/// mutated in memory, and the whole record is written back. No atomic
/// array-append primitive is assumed, so concurrent writers to the same
/// user may race and one update may silently overwrite another's
/// file-list change (last-write-wins on the whole record).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All records, order unspecified.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Fetch by identity key. `NotFound` if no record has that key.
    async fn get_user(&self, id: &str) -> Result<User, StoreError>;

    /// Insert a new record. `Duplicate` if the identity key exists.
    async fn create_user(&self, user: User) -> Result<(), StoreError>;

    /// Overwrite the full record matched by the record's own identity
    /// key. Matching nothing is not an error.
    async fn update_user(&self, user: User) -> Result<(), StoreError>;

    /// Remove by identity key. Deleting an absent key is not an error,
    /// mirroring "no rows matched" being a non-error outcome.
    async fn delete_user(&self, id: &str) -> Result<(), StoreError>;

    /// Append a file to the user's file sequence. `NotFound` if the
    /// user is absent.
    async fn add_file(&self, id: &str, file: File) -> Result<(), StoreError>;

    /// Replace the user's file sequence with empty. `NotFound` if the
    /// user is absent.
    async fn clear_files(&self, id: &str) -> Result<(), StoreError>;

    /// The user's file sequence. `NotFound` if the user is absent.
    async fn get_files(&self, id: &str) -> Result<Vec<File>, StoreError>;
}
