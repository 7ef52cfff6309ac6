use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::normalizer::Normalizer;
use crate::publisher::{DiscordWebhook, DryRunPublisher, EmbedStyle, Publisher};
use crate::store::{GistStore, StateStore};

pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub normalizer: Normalizer,
    pub store: Arc<dyn StateStore + Send + Sync>,
    pub publisher: Arc<dyn Publisher + Send + Sync>,
}

impl AppContext {
    /// Wire up the HTTP-backed components. With `dry_run`, payloads are
    /// printed instead of posted.
    pub fn new(config: Config, dry_run: bool) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(config.http.user_agent.as_str())
            .build()?;

        let style = EmbedStyle {
            color: config.webhook.color,
            footer: config.webhook.footer.clone(),
        };

        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(client.clone()));
        let store: Arc<dyn StateStore + Send + Sync> =
            Arc::new(GistStore::new(client.clone(), &config.state));
        let publisher: Arc<dyn Publisher + Send + Sync> = if dry_run {
            Arc::new(DryRunPublisher::new(style))
        } else {
            Arc::new(DiscordWebhook::new(client, config.webhook.url.clone(), style))
        };

        Ok(Self::from_parts(config, fetcher, store, publisher))
    }

    /// Assemble a context from existing components.
    pub fn from_parts(
        config: Config,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        store: Arc<dyn StateStore + Send + Sync>,
        publisher: Arc<dyn Publisher + Send + Sync>,
    ) -> Self {
        let normalizer = Normalizer::new(config.feed.max_articles, config.feed.summary_max_chars);

        Self {
            config,
            fetcher,
            normalizer,
            store,
            publisher,
        }
    }
}
