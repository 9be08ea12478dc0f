use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection,
};
use tracing::debug;
use uuid::Uuid;

use crate::users::{dto::UserPayload, repo_types::User};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("user not found")]
    NotFound,
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),
    /// Failures from stores that are not backed by the driver.
    #[allow(dead_code)]
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence operations for users, keyed by the public `userId`.
///
/// Each call maps to a single storage round-trip with no retries. Update and
/// delete of an unknown `userId` succeed without touching anything.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Assigns fresh `_id` and `userId`, inserts, and returns the stored record.
    async fn create(&self, user: User) -> Result<User, StoreError>;
    async fn list(&self) -> Result<Vec<User>, StoreError>;
    async fn get_by_user_id(&self, user_id: &str) -> Result<User, StoreError>;
    /// Sets the four editable fields and echoes `patch` back.
    async fn update_by_user_id(
        &self,
        user_id: &str,
        patch: UserPayload,
    ) -> Result<UserPayload, StoreError>;
    async fn delete_by_user_id(&self, user_id: &str) -> Result<(), StoreError>;
}

/// Stamps a record with new identifiers ahead of insertion.
pub(crate) fn assign_ids(mut user: User) -> User {
    user.id = Some(ObjectId::new());
    user.user_id = Uuid::new_v4().to_string();
    user
}

/// `$set` over the four editable fields; ids and password are never touched.
pub(crate) fn editable_fields_update(patch: &UserPayload) -> Document {
    doc! {
        "$set": {
            "firstName": patch.first_name.as_str(),
            "lastName": patch.last_name.as_str(),
            "email": patch.email.as_str(),
            "mobileNumber": patch.mobile_number.as_str(),
        }
    }
}

#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(collection: Collection<User>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn create(&self, user: User) -> Result<User, StoreError> {
        let user = assign_ids(user);
        self.collection.insert_one(&user, None).await?;
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let mut cursor = self.collection.find(doc! {}, None).await?;
        let mut users = Vec::new();
        while let Some(user) = cursor.try_next().await? {
            users.push(user);
        }
        Ok(users)
    }

    async fn get_by_user_id(&self, user_id: &str) -> Result<User, StoreError> {
        self.collection
            .find_one(doc! { "userId": user_id }, None)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn update_by_user_id(
        &self,
        user_id: &str,
        patch: UserPayload,
    ) -> Result<UserPayload, StoreError> {
        let update = editable_fields_update(&patch);
        let res = self
            .collection
            .update_one(doc! { "userId": user_id }, update, None)
            .await?;
        debug!(%user_id, matched = res.matched_count, "update_one");
        Ok(patch)
    }

    async fn delete_by_user_id(&self, user_id: &str) -> Result<(), StoreError> {
        let res = self
            .collection
            .delete_one(doc! { "userId": user_id }, None)
            .await?;
        debug!(%user_id, deleted = res.deleted_count, "delete_one");
        Ok(())
    }
}
