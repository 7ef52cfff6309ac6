//! One pass of the feed-to-webhook pipeline.
//!
//! load state → fetch → filter already-posted → publish oldest first →
//! trim and save state. Only a failed feed fetch aborts the pass; state and
//! publish failures are logged and the pass continues.

use crate::app::{AppContext, Result};
use crate::domain::{Article, PostedState};
use crate::store::{StateStore, StoreError};

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Save the updated state at the end of the pass.
    pub persist: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { persist: true }
    }
}

/// Outcome of a single pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub fetched: usize,
    pub new: usize,
    /// IDs published in this pass, in publish order
    pub posted: Vec<String>,
    /// IDs that failed to publish, left for the next pass
    pub failed: Vec<String>,
    pub state_saved: bool,
}

pub async fn run_once(ctx: &AppContext, options: RunOptions) -> Result<RunReport> {
    let mut state = load_state(ctx.store.as_ref()).await;

    let articles = fetch_articles(ctx).await?;
    tracing::info!("Fetched {} articles from {}", articles.len(), ctx.config.feed.url);

    // Feed order is newest first; publish oldest first.
    let pending: Vec<&Article> = articles
        .iter()
        .filter(|article| !state.contains(&article.id))
        .rev()
        .collect();
    tracing::info!("New articles to post: {}", pending.len());

    let mut report = RunReport {
        fetched: articles.len(),
        new: pending.len(),
        ..RunReport::default()
    };

    for article in pending {
        if state.contains(&article.id) {
            tracing::debug!("Skipping duplicate entry {}", article.id);
            continue;
        }

        match ctx.publisher.publish(article).await {
            Ok(()) => {
                state.record(&article.id);
                report.posted.push(article.id.clone());
            }
            Err(e) => {
                tracing::warn!("Failed to post {}: {}", article.display_title(), e);
                report.failed.push(article.id.clone());
            }
        }
    }

    state.trim(ctx.config.state.history_limit);

    if options.persist {
        report.state_saved = save_state(ctx.store.as_ref(), &state).await;
    } else {
        tracing::debug!("Not persisting state");
    }

    Ok(report)
}

/// Fetch and normalize the configured feed.
pub async fn fetch_articles(ctx: &AppContext) -> Result<Vec<Article>> {
    let body = ctx.fetcher.fetch(&ctx.config.feed.url).await?;
    ctx.normalizer.normalize(&body)
}

/// Load state, falling back to an empty history on any failure.
pub async fn load_state(store: &(dyn StateStore + Send + Sync)) -> PostedState {
    match store.load().await {
        Ok(state) => state,
        Err(StoreError::NotConfigured) => {
            tracing::warn!("State store credentials not set, skipping state check");
            PostedState::default()
        }
        Err(e) => {
            tracing::warn!("Error fetching state: {}", e);
            PostedState::default()
        }
    }
}

async fn save_state(store: &(dyn StateStore + Send + Sync), state: &PostedState) -> bool {
    match store.save(state).await {
        Ok(()) => true,
        Err(StoreError::NotConfigured) => {
            tracing::debug!("State store not configured, state not saved");
            false
        }
        Err(e) => {
            tracing::warn!("Error saving state: {}", e);
            false
        }
    }
}
