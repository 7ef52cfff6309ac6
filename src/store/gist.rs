use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::json;

use crate::config::StateConfig;
use crate::domain::PostedState;
use crate::store::{StateStore, StoreError};

const GITHUB_JSON: &str = "application/vnd.github.v3+json";

/// State kept as a named file inside a GitHub gist.
pub struct GistStore {
    client: Client,
    api_base: String,
    filename: String,
    credentials: Option<Credentials>,
}

struct Credentials {
    token: String,
    gist_id: String,
}

#[derive(Debug, Deserialize)]
struct GistDocument {
    #[serde(default)]
    files: HashMap<String, GistFile>,
}

#[derive(Debug, Deserialize)]
struct GistFile {
    content: Option<String>,
}

impl GistStore {
    pub fn new(client: Client, config: &StateConfig) -> Self {
        let credentials = config.credentials().map(|(token, gist_id)| Credentials {
            token: token.to_string(),
            gist_id: gist_id.to_string(),
        });

        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            filename: config.filename.clone(),
            credentials,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn request(
        &self,
        build: impl FnOnce(&Client, String) -> RequestBuilder,
    ) -> Result<RequestBuilder, StoreError> {
        let creds = self.credentials.as_ref().ok_or(StoreError::NotConfigured)?;
        let url = format!("{}/gists/{}", self.api_base, creds.gist_id);

        Ok(build(&self.client, url)
            .bearer_auth(&creds.token)
            .header(ACCEPT, GITHUB_JSON))
    }
}

#[async_trait]
impl StateStore for GistStore {
    async fn load(&self) -> Result<PostedState, StoreError> {
        let response = self.request(|client, url| client.get(url))?.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status.as_u16()));
        }

        let document: GistDocument = response.json().await?;
        match document.files.get(&self.filename).and_then(|f| f.content.as_deref()) {
            Some(content) => Ok(PostedState::from_json(content)?),
            None => {
                tracing::debug!("{} not present in gist, starting fresh", self.filename);
                Ok(PostedState::default())
            }
        }
    }

    async fn save(&self, state: &PostedState) -> Result<(), StoreError> {
        let payload = json!({
            "files": {
                self.filename.as_str(): {
                    "content": state.to_json()?
                }
            }
        });

        let response = self
            .request(|client, url| client.patch(url))?
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status.as_u16()));
        }

        tracing::info!("State saved ({} ids)", state.len());
        Ok(())
    }
}
