pub mod discord;
pub mod embed;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::Article;

pub use discord::DiscordWebhook;
pub use embed::{EmbedStyle, WebhookPayload};

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Webhook URL is not configured")]
    NotConfigured,

    #[error("Webhook returned HTTP {0}")]
    Status(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[async_trait]
pub trait Publisher {
    /// Deliver one article. `Ok` only once the destination has accepted it.
    async fn publish(&self, article: &Article) -> Result<(), PublishError>;
}

/// Prints payloads to stdout instead of sending them.
pub struct DryRunPublisher {
    style: EmbedStyle,
}

impl DryRunPublisher {
    pub fn new(style: EmbedStyle) -> Self {
        Self { style }
    }
}

#[async_trait]
impl Publisher for DryRunPublisher {
    async fn publish(&self, article: &Article) -> Result<(), PublishError> {
        let payload = WebhookPayload::for_article(article, &self.style, Utc::now());
        println!("{}", serde_json::to_string_pretty(&payload)?);
        Ok(())
    }
}
