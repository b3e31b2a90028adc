use async_trait::async_trait;
use std::sync::RwLock;

use super::Store;
use crate::models::StoreState;
use crate::utils::StoreError;

/// In-process store, used by tests and for throwaway runs
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn load(&self) -> Result<StoreState, StoreError> {
        Ok(self
            .state
            .read()
            .map(|state| state.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone()))
    }

    async fn save(&self, state: &StoreState) -> Result<(), StoreError> {
        match self.state.write() {
            Ok(mut current) => *current = state.clone(),
            Err(poisoned) => *poisoned.into_inner() = state.clone(),
        }
        Ok(())
    }
}
