pub mod gist;
pub mod memory;

use async_trait::async_trait;

use crate::domain::PostedState;

pub use gist::GistStore;
pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("State store credentials are not configured")]
    NotConfigured,

    #[error("State store returned HTTP {0}")]
    Status(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed state document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("State store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence for the posted-ID history between runs.
#[async_trait]
pub trait StateStore {
    /// Read the stored state. A document without the state file yields an
    /// empty state, not an error.
    async fn load(&self) -> Result<PostedState, StoreError>;

    /// Overwrite the stored state.
    async fn save(&self, state: &PostedState) -> Result<(), StoreError>;
}
