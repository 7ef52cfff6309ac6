use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::PostedState;
use crate::store::{StateStore, StoreError};

/// In-process store, used for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<PostedState>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn new(state: PostedState) -> Self {
        Self {
            state: Mutex::new(state),
            saves: Mutex::new(0),
        }
    }

    /// Current stored state.
    pub fn snapshot(&self) -> Result<PostedState, StoreError> {
        let state = self
            .state
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(state.clone())
    }

    /// Number of completed saves.
    pub fn save_count(&self) -> Result<usize, StoreError> {
        let saves = self
            .saves
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(*saves)
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn load(&self) -> Result<PostedState, StoreError> {
        self.snapshot()
    }

    async fn save(&self, state: &PostedState) -> Result<(), StoreError> {
        let mut stored = self
            .state
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *stored = state.clone();

        let mut saves = self
            .saves
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *saves += 1;

        Ok(())
    }
}
