use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::users::{
    dto::UserPayload,
    repo::{assign_ids, StoreError, UserStore},
    repo_types::User,
};

/// In-process `UserStore` for handler tests. `set_failing(true)` makes every
/// call return `StoreError::Unavailable`.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
    failing: AtomicBool,
}

impl MemoryUserStore {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn snapshot(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store set to fail".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: User) -> Result<User, StoreError> {
        self.check()?;
        let user = assign_ids(user);
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.check()?;
        Ok(self.snapshot().await)
    }

    async fn get_by_user_id(&self, user_id: &str) -> Result<User, StoreError> {
        self.check()?;
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.user_id == user_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_by_user_id(
        &self,
        user_id: &str,
        patch: UserPayload,
    ) -> Result<UserPayload, StoreError> {
        self.check()?;
        let mut users = self.users.write().await;
        if let Some(u) = users.iter_mut().find(|u| u.user_id == user_id) {
            u.first_name = patch.first_name.clone();
            u.last_name = patch.last_name.clone();
            u.email = patch.email.clone();
            u.mobile_number = patch.mobile_number.clone();
        }
        Ok(patch)
    }

    async fn delete_by_user_id(&self, user_id: &str) -> Result<(), StoreError> {
        self.check()?;
        let mut users = self.users.write().await;
        if let Some(pos) = users.iter().position(|u| u.user_id == user_id) {
            users.remove(pos);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn ann() -> User {
        User {
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "a@x.com".into(),
            mobile_number: "123".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn concurrent_creates_get_unique_ids() {
        let store = Arc::new(MemoryUserStore::default());
        let mut handles = Vec::new();
        for _ in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move { store.create(ann()).await }));
        }
        let mut ids = HashSet::new();
        for h in handles {
            let user = h.await.unwrap().unwrap();
            assert!(!user.user_id.is_empty());
            assert!(ids.insert(user.user_id));
        }
        assert_eq!(store.list().await.unwrap().len(), 32);
    }

    #[tokio::test]
    async fn update_and_delete_of_unknown_id_are_noops() {
        let store = MemoryUserStore::default();
        let created = store.create(ann()).await.unwrap();
        let patch = UserPayload {
            first_name: "Bob".into(),
            ..Default::default()
        };

        let echoed = store.update_by_user_id("missing", patch.clone()).await.unwrap();
        assert_eq!(echoed, patch);
        store.delete_by_user_id("missing").await.unwrap();

        assert_eq!(store.snapshot().await, vec![created]);
    }

    #[tokio::test]
    async fn get_after_delete_is_not_found() {
        let store = MemoryUserStore::default();
        let created = store.create(ann()).await.unwrap();
        store.delete_by_user_id(&created.user_id).await.unwrap();
        let err = store.get_by_user_id(&created.user_id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }
}
