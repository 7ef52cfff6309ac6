use serde::{Deserialize, Serialize};

/// A normalized feed entry, ready to be published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Entry guid, or its link when the feed provides none
    pub id: String,
    pub title: String,
    pub link: String,
    /// Publication date as given by the feed, empty when absent
    pub published: String,
    pub summary: String,
    pub image: Option<String>,
}

impl Article {
    pub fn new(id: impl Into<String>, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            link: link.into(),
            published: String::new(),
            summary: String::new(),
            image: None,
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }
}
