use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::Config;
use crate::error::ApiError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const SCRAPE_STATUS_FUNCTION: &str = "functions/send-scrape-status";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessImageRequest {
    pub image_path: String,
    pub user_id: String,
    pub blur_strength: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessImageResponse {
    pub processed_image_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeSummary {
    pub markets: u64,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl ScrapeSummary {
    pub fn now(markets: u64) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();
        Self { markets, timestamp }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeStatusRequest {
    pub emails: Vec<String>,
    pub summary: ScrapeSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeStatusAck {
    pub success: bool,
}

/// Thin wrapper over the backend's HTTP endpoints. No retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let base = config.api_base_url.trim_end_matches('/');
        let base_url =
            Url::parse(&format!("{base}/")).map_err(|e| ApiError::BaseUrl(format!("{base}: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url,
            token: config.functions_token.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::BaseUrl(format!("{path}: {e}")))
    }

    fn token(&self) -> Result<&str, ApiError> {
        self.token.as_deref().ok_or(ApiError::MissingToken)
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self.http.get(self.endpoint("health")?).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "health check",
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }

    /// `GET /markets/today`. Rows are returned as raw JSON.
    pub async fn markets_today(&self) -> Result<Vec<serde_json::Value>, ApiError> {
        let response = self.http.get(self.endpoint("markets/today")?).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "markets fetch",
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }

    /// `POST /process` to blur faces in an uploaded photo.
    pub async fn process_image(
        &self,
        request: &ProcessImageRequest,
    ) -> Result<ProcessImageResponse, ApiError> {
        let token = self.token()?;
        let response = self
            .http
            .post(self.endpoint("process")?)
            .query(&[("token", token)])
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint: "process image",
                status: response.status(),
            });
        }
        Ok(response.json().await?)
    }

    /// Ask the Edge Function proxy to mail a scrape summary.
    ///
    /// Only `200` with `{"success": true}` counts as delivered.
    pub async fn send_scrape_status(
        &self,
        emails: Vec<String>,
        summary: ScrapeSummary,
    ) -> Result<ScrapeStatusAck, ApiError> {
        let token = self.token()?;
        let body = ScrapeStatusRequest { emails, summary };
        tracing::debug!(
            recipients = body.emails.len(),
            markets = summary.markets,
            "sending scrape status"
        );
        let response = self
            .http
            .post(self.endpoint("functions/v1/send-scrape-status")?)
            .query(&[("path", SCRAPE_STATUS_FUNCTION), ("token", token)])
            .json(&body)
            .send()
            .await?;
        if response.status() != StatusCode::OK {
            tracing::warn!(status = %response.status(), "scrape status rejected");
            return Err(ApiError::Status {
                endpoint: "send scrape status",
                status: response.status(),
            });
        }
        let ack: ScrapeStatusAck = response.json().await?;
        if !ack.success {
            return Err(ApiError::Rejected("send scrape status"));
        }
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_under_base_path() {
        let client = ApiClient::new(&Config {
            api_base_url: "https://example.test/api/".to_string(),
            ..Config::default()
        })
        .unwrap();
        assert_eq!(
            client.endpoint("markets/today").unwrap().as_str(),
            "https://example.test/api/markets/today"
        );
    }

    #[test]
    fn rejects_bad_base_url() {
        let err = ApiClient::new(&Config {
            api_base_url: "not a url".to_string(),
            ..Config::default()
        })
        .unwrap_err();
        assert!(matches!(err, ApiError::BaseUrl(_)));
    }

    #[tokio::test]
    async fn token_is_required_for_functions() {
        let client = ApiClient::new(&Config::default()).unwrap();
        let err = client
            .send_scrape_status(vec!["test@example.com".to_string()], ScrapeSummary::now(1))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingToken));
    }

    #[test]
    fn request_body_shape() {
        let body = ScrapeStatusRequest {
            emails: vec!["test@example.com".to_string()],
            summary: ScrapeSummary {
                markets: 1,
                timestamp: 1_700_000_000_000,
            },
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"emails":["test@example.com"],"summary":{"markets":1,"timestamp":1700000000000}}"#
        );
    }
}
