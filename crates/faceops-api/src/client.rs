//! Face recognition service HTTP client (reqwest-based).

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::pagination::fetch_all_pages;
use faceops_core::types::{flatten_match_log, MatchLogRecord, Profile};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Optional filters for match-log queries. Dates are ISO-8601 strings,
/// passed through to the API verbatim.
#[derive(Debug, Clone, Default)]
pub struct LogQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub profile_id: Option<String>,
    pub device_id: Option<String>,
}

/// Client for the face recognition REST API.
///
/// Every request carries a bearer token and `Content-Type: application/json`.
/// Requests are issued strictly one at a time. No request timeout is
/// configured, matching the service's operational assumptions; a hung
/// request blocks the run.
pub struct ApiClient {
    base_url: String,
    api_key: String,
    page_size: usize,
    http: Client,
}

impl ApiClient {
    /// Build a client from the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent("faceops/0.2")
            .build()
            .map_err(|e| ApiError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            page_size: config.page_size.max(1),
            http,
        })
    }

    /// Fetch one page of match logs (`GET /match-logs`).
    pub async fn get_match_logs(
        &self,
        limit: usize,
        offset: usize,
        query: &LogQuery,
    ) -> Result<Vec<MatchLogRecord>, ApiError> {
        let url = format!("{}/match-logs", self.base_url);
        debug!(%url, limit, offset, "GET match logs");

        let mut params: Vec<(&str, String)> = vec![
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        if let Some(start) = &query.start_date {
            params.push(("start_date", start.clone()));
        }
        if let Some(end) = &query.end_date {
            params.push(("end_date", end.clone()));
        }
        if let Some(profile_id) = &query.profile_id {
            params.push(("profile_id", profile_id.clone()));
        }
        if let Some(device_id) = &query.device_id {
            params.push(("device_id", device_id.clone()));
        }

        let response = self.authed(self.http.get(&url)).query(&params).send().await?;
        let raw: Vec<Value> = read_json(response).await?;
        Ok(raw.iter().map(flatten_match_log).collect())
    }

    /// Fetch all match logs matching `query`, paginating until a short page.
    pub async fn get_all_match_logs(
        &self,
        query: &LogQuery,
    ) -> Result<Vec<MatchLogRecord>, ApiError> {
        let page_size = self.page_size;
        fetch_all_pages(page_size, |offset| {
            self.get_match_logs(page_size, offset, query)
        })
        .await
    }

    /// Fetch all profiles (`GET /profiles`).
    pub async fn get_all_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        let url = format!("{}/profiles", self.base_url);
        debug!(%url, "GET profiles");
        let response = self.authed(self.http.get(&url)).send().await?;
        read_json(response).await
    }

    /// Toggle a profile's active flag (`PATCH /profiles/{id}/toggle`).
    pub async fn set_profile_active(
        &self,
        profile_id: &str,
        active: bool,
    ) -> Result<(), ApiError> {
        let url = format!("{}/profiles/{}/toggle", self.base_url, profile_id);
        debug!(%url, active, "PATCH profile status");
        let response = self
            .authed(self.http.patch(&url))
            .json(&serde_json::json!({ "active": active }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(status_error(status, response).await)
        }
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(status_error(status, response).await);
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

async fn status_error(status: reqwest::StatusCode, response: reqwest::Response) -> ApiError {
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<no body>".to_string());
    ApiError::Status {
        status: status.as_u16(),
        body,
    }
}
