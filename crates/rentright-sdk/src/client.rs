//! RentRight client implementation.

use crate::error::SdkError;
use rentright_domain::{FairnessVerdict, ListingId, ListingView, WwsAssessment, WwsInput};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

/// API base URL used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:9000/api";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "RENTRIGHT_API_URL";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// RentRight SDK client
#[derive(Debug, Clone)]
pub struct RentRightClient {
    base_url: String,
    http: reqwest::Client,
}

impl RentRightClient {
    /// Create a client for the API rooted at `base_url` (e.g. `http://host:9000/api`)
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Create a client from `RENTRIGHT_API_URL`, falling back to the default URL
    pub fn from_env() -> Self {
        let url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&url)
    }

    /// Base URL all requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every listing with its fairness verdict
    pub async fn list_listings(&self) -> Result<Vec<ListingView>, SdkError> {
        let response = self.http.get(self.url("/listings")).send().await?;
        decode(response).await
    }

    /// Fetch one listing with its fairness verdict
    pub async fn get_listing(&self, id: ListingId) -> Result<ListingView, SdkError> {
        let response = self
            .http
            .get(self.url(&format!("/listings/{}", id)))
            .send()
            .await?;
        decode(response).await
    }

    /// Classify raw rent figures on the server
    pub async fn classify(
        &self,
        advertised_rent: f64,
        max_legal_rent: f64,
        wws_points: u32,
    ) -> Result<FairnessVerdict, SdkError> {
        let response = self
            .http
            .get(self.url("/classify"))
            .query(&[
                ("advertisedRent", advertised_rent.to_string()),
                ("maxLegalRent", max_legal_rent.to_string()),
                ("wwsPoints", wws_points.to_string()),
            ])
            .send()
            .await?;
        decode(response).await
    }

    /// Score raw property characteristics on the server
    pub async fn assess(&self, input: &WwsInput) -> Result<WwsAssessment, SdkError> {
        let response = self
            .http
            .post(self.url("/wws/assess"))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a response into `T`, mapping error statuses onto `SdkError`
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SdkError> {
    let status = response.status();
    let url = response.url().to_string();
    let body = response.text().await?;
    debug!("{} -> HTTP {}", url, status);

    if status.is_success() {
        return Ok(serde_json::from_str(&body)?);
    }

    let detail = serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.detail)
        .unwrap_or(body);

    if status == StatusCode::NOT_FOUND {
        Err(SdkError::NotFound(detail))
    } else {
        Err(SdkError::ApiError {
            status: status.as_u16(),
            detail,
        })
    }
}
