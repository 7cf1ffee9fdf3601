pub mod error;

pub use error::{Result, ScraperError};

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;
use tubescout_core::ScrapeResult;

/// Header carrying the static API key on every request.
const API_KEY_HEADER: &str = "X-Api-Key";

/// Shown when the service fails without a usable message of its own.
const GENERIC_ERROR: &str = "An error occurred while scraping";

/// Abstraction over the scrape collaborator so the presentation layer and
/// tests can substitute the live service.
#[async_trait]
pub trait ScrapeBackend: Send + Sync {
    async fn scrape_video(&self, video_id: &str) -> Result<ScrapeResult>;
    async fn scrape_channel(&self, channel_id: &str) -> Result<ScrapeResult>;
}

pub struct ScrapeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ScrapeClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Deterministic URL for the transcript PDF artifact of a video.
    pub fn transcript_pdf_url(&self, video_id: &str) -> String {
        format!("{}/api/download/pdf/{}", self.base_url, video_id)
    }

    /// Fetch the transcript PDF artifact bytes for a video.
    pub async fn download_transcript_pdf(&self, video_id: &str) -> Result<Vec<u8>> {
        let url = self.transcript_pdf_url(video_id);
        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ScraperError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }

    async fn post_scrape(&self, path: &str, body: Value) -> Result<ScrapeResult> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ScraperError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let result: ScrapeResult = resp.json().await?;
        Ok(result)
    }
}

#[async_trait]
impl ScrapeBackend for ScrapeClient {
    async fn scrape_video(&self, video_id: &str) -> Result<ScrapeResult> {
        info!(video_id, "Requesting video scrape");
        let result = self
            .post_scrape("/api/scrape/video", json!({ "video_id": video_id }))
            .await?;
        info!(video_id, fields = result.len(), "Video scrape returned");
        Ok(result)
    }

    async fn scrape_channel(&self, channel_id: &str) -> Result<ScrapeResult> {
        info!(channel_id, "Requesting channel scrape");
        let result = self
            .post_scrape("/api/scrape/channel", json!({ "channel_id": channel_id }))
            .await?;
        info!(channel_id, fields = result.len(), "Channel scrape returned");
        Ok(result)
    }
}

/// Pull the service's human-readable message out of an error body. The
/// service reports failures as `{"error": "..."}`; anything else falls back
/// to the raw body, then to a generic message.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return message.to_string();
        }
    }
    if body.trim().is_empty() {
        GENERIC_ERROR.to_string()
    } else {
        body.to_string()
    }
}
