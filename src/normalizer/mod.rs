use feed_rs::model::{Entry, Link, Text};
use feed_rs::parser;

use crate::app::{NewsRelayError, Result};
use crate::domain::Article;
use crate::sanitizer;

/// Turns a raw feed document into a bounded list of [`Article`]s, in feed order.
#[derive(Debug, Clone)]
pub struct Normalizer {
    max_articles: usize,
    summary_max_chars: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(10, 200)
    }
}

impl Normalizer {
    pub fn new(max_articles: usize, summary_max_chars: usize) -> Self {
        Self {
            max_articles,
            summary_max_chars,
        }
    }

    pub fn normalize(&self, body: &[u8]) -> Result<Vec<Article>> {
        let feed = parser::Builder::new()
            .id_generator(link_as_id)
            .build()
            .parse(body)
            .map_err(|e| NewsRelayError::FeedParse(e.to_string()))?;

        let articles = feed
            .entries
            .into_iter()
            .take(self.max_articles)
            .map(|entry| self.to_article(entry))
            .collect();

        Ok(articles)
    }

    fn to_article(&self, entry: Entry) -> Article {
        let image = extract_image(&entry);
        let link = entry
            .links
            .first()
            .map(|l| l.href.clone())
            .unwrap_or_default();
        let id = if entry.id.trim().is_empty() {
            link.clone()
        } else {
            entry.id
        };

        Article {
            id,
            title: entry
                .title
                .map(|t| sanitizer::strip(&t.content))
                .unwrap_or_default(),
            link,
            published: entry
                .published
                .map(|dt| dt.to_rfc2822())
                .unwrap_or_default(),
            summary: entry
                .summary
                .map(|s| sanitizer::summarize(&s.content, self.summary_max_chars))
                .unwrap_or_default(),
            image,
        }
    }
}

// Entries without a guid are identified by their link.
fn link_as_id(links: &[Link], _title: &Option<Text>, _uri: Option<&str>) -> String {
    links.first().map(|l| l.href.clone()).unwrap_or_default()
}

/// First media thumbnail, else the first enclosure with an `image/*` type.
///
/// feed-rs keeps `<enclosure>` and `<media:content>` in the same list, so an
/// image `media:content` listed before the enclosure is picked first.
fn extract_image(entry: &Entry) -> Option<String> {
    let thumbnail = entry
        .media
        .iter()
        .flat_map(|media| media.thumbnails.iter())
        .map(|thumb| thumb.image.uri.trim())
        .find(|uri| !uri.is_empty());

    if let Some(uri) = thumbnail {
        return Some(uri.to_string());
    }

    entry
        .media
        .iter()
        .flat_map(|media| media.content.iter())
        .find(|content| {
            content
                .content_type
                .as_ref()
                .map(|m| m.to_string().starts_with("image/"))
                .unwrap_or(false)
        })
        .and_then(|content| content.url.as_ref())
        .map(|url| url.to_string())
}
