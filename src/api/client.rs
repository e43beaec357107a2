use std::time::Duration;

use thiserror::Error;

use super::types::{
    DrugDetails, RecommendationResponse, SearchResponse, SentimentResponse, SideEffectsResponse,
};

/// Errors from the drug insights API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, TLS, timeout, connection refused)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("API error ({code})")]
    Status { code: u16 },

    /// Body did not match the expected response shape
    #[error("Unexpected response shape: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status {
                code: status.as_u16(),
            }
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Typed client for the drug insights HTTP API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).query(query).send().await?;
        let response = response.error_for_status().map_err(ApiError::from)?;
        // Decode errors from .json() surface as reqwest decode errors
        let body = response.json::<T>().await?;
        Ok(body)
    }

    /// Search drugs by name fragment
    pub async fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
        self.get_json("/api/drugs/search", &[("q", query)]).await
    }

    pub async fn sentiment(&self, drug_name: &str) -> Result<SentimentResponse, ApiError> {
        self.get_json("/api/drugs/sentiment", &[("drug_name", drug_name)])
            .await
    }

    pub async fn recommend(&self, drug_name: &str) -> Result<RecommendationResponse, ApiError> {
        self.get_json("/api/drugs/recommend", &[("drug_name", drug_name)])
            .await
    }

    pub async fn side_effects(&self, drug_name: &str) -> Result<SideEffectsResponse, ApiError> {
        self.get_json("/api/drugs/side-effects", &[("drug_name", drug_name)])
            .await
    }

    /// Fetch the three per-drug datasets concurrently
    ///
    /// The aggregate resolves only once all three requests have completed
    /// and fails as soon as any one of them fails; no partial result is
    /// surfaced.
    pub async fn fetch_details(&self, drug_name: &str) -> Result<DrugDetails, ApiError> {
        let (sentiment, recommendations, side_effects) = tokio::try_join!(
            self.sentiment(drug_name),
            self.recommend(drug_name),
            self.side_effects(drug_name),
        )?;

        Ok(DrugDetails {
            sentiment,
            recommendations,
            side_effects,
        })
    }
}
