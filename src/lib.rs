//! # newsrelay
//!
//! Polls a news site's RSS feed and posts articles it has not posted before
//! to a webhook, remembering what was sent in a remote JSON document.
//!
//! ## Architecture
//!
//! A single linear pass, run once per invocation by an external scheduler:
//!
//! ```text
//! StateStore::load → Fetcher → Normalizer → filter → Publisher → StateStore::save
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export DISCORD_WEBHOOK_URL=https://discord.com/api/webhooks/...
//! export GIST_TOKEN=... GIST_ID=...
//!
//! # Publish new articles
//! newsrelay
//!
//! # See what would be posted
//! newsrelay run --dry-run
//! newsrelay preview
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together fetcher,
/// normalizer, state store and publisher.
pub mod app;

/// Command-line interface using clap.
///
/// - `run [--dry-run]` - Publish new articles (default)
/// - `preview` - List feed entries with their posted status
/// - `state` - Print the persisted IDs
pub mod cli;

/// Configuration from a TOML file and environment variables.
pub mod config;

/// Core domain models.
///
/// - [`Article`](domain::Article): A normalized feed entry
/// - [`PostedState`](domain::PostedState): Ordered, capped history of posted IDs
pub mod domain;

/// HTTP retrieval of the feed document.
pub mod fetcher;

/// Feed parsing into bounded article lists.
pub mod normalizer;

/// Webhook publishing.
///
/// - [`Publisher`](publisher::Publisher): Async trait for delivery
/// - [`DiscordWebhook`](publisher::DiscordWebhook): Embed payloads over HTTP POST
/// - [`DryRunPublisher`](publisher::DryRunPublisher): Prints payloads to stdout
pub mod publisher;

/// The load → fetch → publish → save pass.
pub mod relay;

/// Tag stripping, entity decoding and truncation.
pub mod sanitizer;

/// Persistence of the posted-ID history.
///
/// - [`StateStore`](store::StateStore): Trait for load/save
/// - [`GistStore`](store::GistStore): GitHub gist backed
/// - [`MemoryStore`](store::MemoryStore): In-process
pub mod store;
