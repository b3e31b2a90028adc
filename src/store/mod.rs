pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::models::StoreState;
use crate::utils::{AppError, StoreError};

/// Storage backend holding the whole users/profiles document
#[async_trait]
pub trait Store: Send + Sync {
    async fn load(&self) -> Result<StoreState, StoreError>;
    async fn save(&self, state: &StoreState) -> Result<(), StoreError>;
}

/// Shared handle used by the services.
///
/// All read-modify-write cycles go through `update`, which holds a single
/// writer lock for the whole cycle so concurrent requests cannot drop each
/// other's changes.
#[derive(Clone)]
pub struct Datastore {
    backend: Arc<dyn Store>,
    write_lock: Arc<Mutex<()>>,
}

impl Datastore {
    pub fn new(backend: Arc<dyn Store>) -> Self {
        Self {
            backend,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Snapshot of the current state for lookups
    pub async fn read(&self) -> Result<StoreState, StoreError> {
        self.backend.load().await
    }

    /// Loads, applies `mutate` and persists the result under the writer lock.
    /// Nothing is saved when `mutate` returns an error.
    pub async fn update<T, F>(&self, mutate: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut StoreState) -> Result<T, AppError>,
    {
        let _guard = self.write_lock.lock().await;

        let mut state = self.backend.load().await?;
        let outcome = mutate(&mut state)?;
        self.backend.save(&state).await?;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use chrono::Utc;
    use serde_json::json;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: json!("Ann"),
            roll: json!("R1"),
            email: format!("{}@x.com", id),
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn rejected_mutation_is_not_saved() {
        let store = Datastore::new(Arc::new(MemoryStore::new()));

        let result: Result<(), AppError> = store
            .update(|state| {
                state.users.push(user("u1"));
                Err(AppError::EmailTaken)
            })
            .await;

        assert!(result.is_err());
        assert!(store.read().await.unwrap().users.is_empty());
    }

    #[tokio::test]
    async fn concurrent_updates_keep_every_write() {
        let store = Datastore::new(Arc::new(MemoryStore::new()));

        let tasks: Vec<_> = (0..20)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .update(|state| {
                            state.users.push(user(&format!("u{}", i)));
                            Ok(())
                        })
                        .await
                })
            })
            .collect();

        for task in futures::future::join_all(tasks).await {
            task.unwrap().unwrap();
        }

        assert_eq!(store.read().await.unwrap().users.len(), 20);
    }
}
