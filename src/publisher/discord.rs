use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;

use crate::domain::Article;
use crate::publisher::{EmbedStyle, PublishError, Publisher, WebhookPayload};

/// Posts each article as a single embed to a Discord-style webhook.
pub struct DiscordWebhook {
    client: Client,
    url: Option<String>,
    style: EmbedStyle,
}

impl DiscordWebhook {
    pub fn new(client: Client, url: Option<String>, style: EmbedStyle) -> Self {
        Self { client, url, style }
    }
}

#[async_trait]
impl Publisher for DiscordWebhook {
    async fn publish(&self, article: &Article) -> Result<(), PublishError> {
        let url = self.url.as_deref().ok_or(PublishError::NotConfigured)?;
        let payload = WebhookPayload::for_article(article, &self.style, Utc::now());

        let response = self.client.post(url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::Status(status.as_u16()));
        }

        tracing::info!("Posted: {}", article.display_title());
        Ok(())
    }
}
