use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Cross-run record of published article IDs.
///
/// `last_posted_ids` is kept in the order IDs were recorded, oldest first,
/// without duplicates. Trimming drops from the front so the most recent
/// IDs survive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostedState {
    #[serde(default)]
    pub last_posted_ids: Vec<String>,

    /// Unknown keys in the stored document, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PostedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let mut state: Self = serde_json::from_str(content)?;
        state.dedup();
        Ok(state)
    }

    /// Pretty-printed JSON with two-space indentation. Non-ASCII is kept as-is.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.last_posted_ids.iter().any(|posted| posted == id)
    }

    /// Append `id` unless it is already present. Returns whether it was added.
    pub fn record(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.last_posted_ids.push(id.to_string());
        true
    }

    /// Keep at most `limit` of the most recently recorded IDs.
    pub fn trim(&mut self, limit: usize) {
        let len = self.last_posted_ids.len();
        if len > limit {
            self.last_posted_ids.drain(..len - limit);
        }
    }

    pub fn len(&self) -> usize {
        self.last_posted_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_posted_ids.is_empty()
    }

    // First occurrence wins.
    fn dedup(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.last_posted_ids.retain(|id| seen.insert(id.clone()));
    }
}
