//! HTTP implementation of the collection API contract.
//!
//! One collection endpoint per resource type, joined against the configured
//! base URL. Requests carry JSON bodies, no authentication headers, and no
//! client-side timeout.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use url::Url;

use crate::config::Config;
use crate::error::{Result, ShopdeskError};
use crate::types::Resource;

use super::CollectionApi;

pub struct HttpCollectionApi {
    client: Client,
    base_url: Url,
}

impl HttpCollectionApi {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.base_url()?))
    }

    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            collection
        )
    }

    fn item_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(collection), id)
    }
}

/// Pass 2xx responses through; map anything else to an HTTP error whose
/// message is extracted from the response body.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ShopdeskError::Http {
        status: status.as_u16(),
        message: error_message(&body, status),
    })
}

/// Prefer a structured `message`/`error` field from a JSON body, then the
/// raw body text, then a status-derived fallback.
fn error_message(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(|m| m.as_str())
                && !message.is_empty()
            {
                return message.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    format!(
        "HTTP {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("error")
    )
}

#[async_trait]
impl<R: Resource> CollectionApi<R> for HttpCollectionApi {
    async fn list(&self) -> Result<Vec<R>> {
        let response = self
            .client
            .get(self.collection_url(R::COLLECTION))
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Vec<R>>().await?)
    }

    async fn create(&self, draft: &R::Draft) -> Result<()> {
        let response = self
            .client
            .post(self.collection_url(R::COLLECTION))
            .json(draft)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn update(&self, id: &str, draft: &R::Draft) -> Result<()> {
        let response = self
            .client
            .put(self.item_url(R::COLLECTION, id))
            .json(draft)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.item_url(R::COLLECTION, id))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
