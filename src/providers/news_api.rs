//! News API client used for safety assessment
//!
//! Searches NewsAPI's `/everything` endpoint for recent crime coverage of a
//! city, newest first.

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::{SafetyProvider, build_http_client, read_json, request_error, require_api_key};
use crate::config::NewsConfig;
use crate::error::ProviderDomain;
use crate::models::{NewsArticle, SafetyPayload};
use crate::{Result, TravelPlannerError};

fn unavailable(detail: String) -> String {
    format!("news provider unavailable: {detail}")
}

/// Search query sent to the news provider for `city`
#[must_use]
pub fn crime_query(city: &str) -> String {
    format!("{} crime OR theft OR violence", city.trim())
}

/// NewsAPI client
pub struct NewsApiClient {
    client: Client,
    config: NewsConfig,
}

impl NewsApiClient {
    pub fn new(config: NewsConfig) -> anyhow::Result<Self> {
        let client = build_http_client(config.timeout())?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl SafetyProvider for NewsApiClient {
    #[instrument(skip(self))]
    async fn fetch_safety(&self, city: &str) -> Result<SafetyPayload> {
        let api_key = require_api_key(self.config.api_key.as_deref(), "NEWS_API_KEY")?;
        let start_time = Instant::now();
        let url = format!("{}/everything", self.config.base_url.trim_end_matches('/'));
        let page_size = self.config.page_size.to_string();
        let query = crime_query(city);

        info!("Searching crime news for '{}'", city);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
                ("apiKey", api_key),
            ])
            .send()
            .await
            .map_err(|e| request_error(ProviderDomain::Safety, &e, unavailable))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<newsapi::SearchResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            warn!("News API returned {} for '{}': {}", status, city, detail);
            return Err(TravelPlannerError::provider(
                ProviderDomain::Safety,
                unavailable(format!("HTTP {}: {}", status.as_u16(), detail)),
            ));
        }

        let search: newsapi::SearchResponse =
            read_json(response, ProviderDomain::Safety, unavailable).await?;
        let payload = search.into_payload().map_err(|detail| {
            TravelPlannerError::provider(ProviderDomain::Safety, unavailable(detail))
        })?;

        info!(
            "Found {} news articles for '{}' in {:.3}s",
            payload.articles.len(),
            city,
            start_time.elapsed().as_secs_f64()
        );

        Ok(payload)
    }
}

/// NewsAPI response structures
mod newsapi {
    use super::{DateTime, NewsArticle, SafetyPayload, Utc};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SearchResponse {
        pub status: String,
        pub total_results: Option<u32>,
        #[serde(default)]
        pub articles: Vec<Article>,
        pub message: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Article {
        pub title: Option<String>,
        pub description: Option<String>,
        pub published_at: Option<String>,
        pub url: Option<String>,
        pub source: Option<Source>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Source {
        pub name: Option<String>,
    }

    impl SearchResponse {
        /// Convert an `ok` response into a payload, or return the provider's message
        pub fn into_payload(self) -> Result<SafetyPayload, String> {
            if self.status != "ok" {
                return Err(self
                    .message
                    .unwrap_or_else(|| format!("status '{}'", self.status)));
            }

            let articles: Vec<NewsArticle> = self
                .articles
                .into_iter()
                .filter_map(Article::into_article)
                .collect();
            let total_results = self
                .total_results
                .unwrap_or_else(|| u32::try_from(articles.len()).unwrap_or(u32::MAX));

            Ok(SafetyPayload {
                articles,
                total_results,
            })
        }
    }

    impl Article {
        /// Articles without a title carry nothing to score and are dropped
        fn into_article(self) -> Option<NewsArticle> {
            let title = self.title.filter(|t| !t.trim().is_empty())?;
            let published_at = self
                .published_at
                .and_then(|p| DateTime::parse_from_rfc3339(&p).ok())
                .map(|p| p.with_timezone(&Utc));

            Some(NewsArticle {
                title,
                description: self.description,
                published_at,
                url: self.url,
                source: self.source.and_then(|s| s.name),
            })
        }
    }
}
