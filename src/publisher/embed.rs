use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::Article;

/// Presentation settings shared by every embed.
#[derive(Debug, Clone)]
pub struct EmbedStyle {
    pub color: u32,
    pub footer: String,
}

impl Default for EmbedStyle {
    fn default() -> Self {
        Self {
            color: 0xFF6600,
            footer: "GIGAZINE".to_string(),
        }
    }
}

/// Body of a webhook POST.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub title: String,
    pub url: String,
    pub description: String,
    pub color: u32,
    pub footer: EmbedFooter,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedImage {
    pub url: String,
}

impl WebhookPayload {
    /// Single-embed payload for `article`, stamped with `sent_at` rather than
    /// the article's own date.
    pub fn for_article(article: &Article, style: &EmbedStyle, sent_at: DateTime<Utc>) -> Self {
        let embed = Embed {
            title: article.title.clone(),
            url: article.link.clone(),
            description: article.summary.clone(),
            color: style.color,
            footer: EmbedFooter {
                text: style.footer.clone(),
            },
            timestamp: sent_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            // Full-size image, not a thumbnail
            image: article.image.clone().map(|url| EmbedImage { url }),
        };

        Self {
            embeds: vec![embed],
        }
    }
}
