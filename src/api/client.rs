use reqwest::Client;
use tracing::debug;

use crate::api::payloads::{ApiReply, BmiRequest, BmiResponse, RecommendationResponse};
use crate::error::Result;
use crate::models::{UserProfile, VisualizationData};

/// Default address of the recommendation backend.
pub const DEFAULT_SERVER: &str = "http://localhost:5000";

/// Client for the three recommendation endpoints. Calls are fire-and-forget
/// from the caller's perspective: no retries, no timeouts, no deduplication.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /calculate_bmi`. Returns the BMI value the backend computed.
    pub async fn calculate_bmi(&self, weight: f64, height: f64) -> Result<f64> {
        let url = self.url("/calculate_bmi");
        debug!(%url, weight, height, "requesting BMI");

        let body = self
            .http
            .post(&url)
            .json(&BmiRequest { weight, height })
            .send()
            .await?
            .text()
            .await?;

        let reply: ApiReply<BmiResponse> = serde_json::from_str(&body)?;
        reply.into_result().map(|r| r.bmi)
    }

    /// `POST /generate_recommendations` with the full serialized profile.
    pub async fn generate_recommendations(
        &self,
        profile: &UserProfile,
    ) -> Result<RecommendationResponse> {
        let url = self.url("/generate_recommendations");
        debug!(%url, age = profile.age, goal = profile.goal.as_str(), "requesting recommendations");

        let body = self
            .http
            .post(&url)
            .json(profile)
            .send()
            .await?
            .text()
            .await?;

        let reply: ApiReply<RecommendationResponse> = serde_json::from_str(&body)?;
        reply.into_result()
    }

    /// `GET /get_visualizations_data`.
    pub async fn visualization_data(&self) -> Result<VisualizationData> {
        let url = self.url("/get_visualizations_data");
        debug!(%url, "requesting visualization data");

        let body = self.http.get(&url).send().await?.text().await?;

        let reply: ApiReply<VisualizationData> = serde_json::from_str(&body)?;
        reply.into_result()
    }
}
