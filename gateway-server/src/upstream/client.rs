//! HTTP client for the upstream restaurant API
//!
//! RPC endpoints authenticate with `token key:secret`; resource
//! endpoints under `/api/resource` take HTTP Basic credentials. Failures
//! are never retried here; callers map them to the wire contract.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::{StatusCode, Url, header};
use serde_json::Value;

use shared::models::{BranchMenuRow, UpstreamTable};

use crate::guards::SessionCredentials;

use super::types::{DataEnvelope, MessageEnvelope, PinLoginMessage};

/// Cap on upstream error bodies carried into our own errors
const ERROR_BODY_LIMIT: usize = 200;

/// Upstream call failures
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream rejected the credentials")]
    Unauthorized,

    #[error("upstream resource not found")]
    NotFound,

    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected upstream response shape")]
    UnexpectedShape,

    #[error("invalid upstream url")]
    InvalidUrl,
}

/// Upstream API client
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build the client. Panics only at startup when the TLS backend
    /// cannot initialize, like the rest of process bring-up.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()
            .expect("Failed to build upstream HTTP client");
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn token_auth(credentials: &SessionCredentials) -> String {
        format!("token {}:{}", credentials.api_key, credentials.api_secret)
    }

    fn basic_auth(credentials: &SessionCredentials) -> String {
        let raw = format!("{}:{}", credentials.api_key, credentials.api_secret);
        format!("Basic {}", BASE64.encode(raw))
    }

    /// Map a non-success status to a typed error, consuming the body.
    async fn status_error(response: reqwest::Response) -> UpstreamError {
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => UpstreamError::Unauthorized,
            StatusCode::NOT_FOUND => UpstreamError::NotFound,
            _ => {
                let body: String = response
                    .text()
                    .await
                    .unwrap_or_default()
                    .chars()
                    .take(ERROR_BODY_LIMIT)
                    .collect();
                UpstreamError::Status {
                    status: status.as_u16(),
                    body,
                }
            }
        }
    }

    /// `POST /api/method/resto.api.login_with_pin`
    pub async fn login_with_pin(&self, pin: &str) -> Result<PinLoginMessage, UpstreamError> {
        let url = format!("{}/api/method/resto.api.login_with_pin", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&serde_json::json!({ "pin": pin }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let envelope: MessageEnvelope<PinLoginMessage> = response.json().await?;
        envelope.message.ok_or(UpstreamError::UnexpectedShape)
    }

    /// `GET /api/method/resto.api.get_all_tables_with_details`
    pub async fn fetch_tables(
        &self,
        credentials: &SessionCredentials,
    ) -> Result<Vec<UpstreamTable>, UpstreamError> {
        let url = format!(
            "{}/api/method/resto.api.get_all_tables_with_details",
            self.base_url
        );
        let response = self
            .http
            .get(url)
            .header(header::AUTHORIZATION, Self::token_auth(credentials))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let envelope: MessageEnvelope<Vec<UpstreamTable>> = response.json().await?;
        Ok(envelope.message.unwrap_or_default())
    }

    /// `GET /api/resource/Branch Menu`
    pub async fn fetch_menu(
        &self,
        credentials: &SessionCredentials,
    ) -> Result<Vec<BranchMenuRow>, UpstreamError> {
        let url = self.resource_url(&["Branch Menu"])?;
        let response = self
            .http
            .get(url)
            .query(&[("fields", r#"["*"]"#), ("limit_page_length", "0")])
            .header(header::AUTHORIZATION, Self::basic_auth(credentials))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let envelope: DataEnvelope<Vec<BranchMenuRow>> = response.json().await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// `GET /api/resource/POS Invoice/{invoice_id}`
    pub async fn fetch_invoice(
        &self,
        credentials: &SessionCredentials,
        invoice_id: &str,
    ) -> Result<Value, UpstreamError> {
        let url = self.resource_url(&["POS Invoice", invoice_id])?;
        let response = self
            .http
            .get(url)
            .query(&[("fields", r#"["*"]"#), ("limit_page_length", "0")])
            .header(header::AUTHORIZATION, Self::token_auth(credentials))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let envelope: DataEnvelope<Value> = response.json().await?;
        envelope.data.ok_or(UpstreamError::UnexpectedShape)
    }

    /// `GET /api/resource/Sales Taxes and Charges Template`
    ///
    /// Raw passthrough: the `{data: [...]}` body is returned as-is.
    pub async fn fetch_taxes(
        &self,
        credentials: &SessionCredentials,
        title: Option<&str>,
    ) -> Result<Value, UpstreamError> {
        let url = self.resource_url(&["Sales Taxes and Charges Template"])?;
        let mut request = self
            .http
            .get(url)
            .query(&[("fields", r#"["name","title"]"#), ("limit_page_length", "20")])
            .header(header::AUTHORIZATION, Self::token_auth(credentials));

        if let Some(title) = title {
            let filters = serde_json::json!([["title", "=", title]]).to_string();
            request = request.query(&[("filters", filters.as_str())]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        Ok(response.json().await?)
    }

    /// Build `{base}/api/resource/<segments...>` with encoded segments
    fn resource_url(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&self.base_url).map_err(|_| UpstreamError::InvalidUrl)?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| UpstreamError::InvalidUrl)?;
            path.extend(["api", "resource"]);
            path.extend(segments);
        }
        Ok(url)
    }
}
