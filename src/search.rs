use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::data_models::SearchResult;
use crate::error::GleanError;

/// A search collaborator maps a free-text query (or URL) to ranked content
/// snippets. Implementations raise on transport or API failure; what a
/// failure means is decided by the caller.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// Tavily search API client.
pub struct TavilyClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TavilyClient {
    pub fn new(api_key: String, base_url: String) -> Result<TavilyClient> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(TavilyClient {
            client,
            api_key,
            base_url,
        })
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&SearchRequest { query })
            .send()
            .await
            .context("Failed to send search request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GleanError::SearchApi { status, body }.into());
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .context("Failed to parse search response")?;
        Ok(parsed.results)
    }
}
