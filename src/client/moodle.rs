//! Moodle REST client implementation

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;

use super::{MoodleApi, ServiceCall};
use crate::error::{ApiError, Result};

/// REST gateway path relative to the site URL
pub const REST_SERVER: &str = "/webservice/rest/server.php";

/// Moodle REST client
pub struct MoodleClient {
    http: HttpClient,
}

impl MoodleClient {
    /// Create a new Moodle REST client
    pub fn new() -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("moodle-launcher/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http })
    }
}

/// Build the form body: extra parameters first, then the fixed fields so
/// they always win over a clashing extra parameter.
pub fn form_fields(call: &ServiceCall) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = call
        .params
        .iter()
        .filter(|(k, _)| !matches!(k.as_str(), "wstoken" | "moodlewsrestformat" | "wsfunction"))
        .cloned()
        .collect();
    fields.push(("wstoken".to_string(), call.token.clone()));
    fields.push(("moodlewsrestformat".to_string(), "json".to_string()));
    fields.push(("wsfunction".to_string(), call.function.clone()));
    fields
}

/// Endpoint URL for a site
pub fn endpoint(site: &str) -> String {
    format!("{}{}", site.trim_end_matches('/'), REST_SERVER)
}

#[async_trait]
impl MoodleApi for MoodleClient {
    async fn call(&self, call: &ServiceCall) -> Result<Value> {
        let url = endpoint(&call.site);
        log::debug!(
            "POST {} wsfunction={} params={:?}",
            url,
            call.function,
            call.params
        );

        let response = self
            .http
            .post(&url)
            .form(&form_fields(call))
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        // Moodle reports failures as JSON whatever the status, so any JSON
        // body is handed back for the caller to inspect
        let parse_error = match serde_json::from_str::<Value>(&body) {
            Ok(data) => {
                if !status.is_success() {
                    log::debug!("{} answered {} with a JSON body", call.function, status);
                }
                return Ok(data);
            }
            Err(e) => e,
        };

        match status {
            StatusCode::OK => {
                let error_msg = format!("Failed to parse response: {}", parse_error);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
            status if status.is_client_error() => {
                Err(ApiError::BadRequest(body_or_status(body, status)).into())
            }
            status if status.is_server_error() => {
                Err(ApiError::ServerError(body_or_status(body, status)).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

fn body_or_status(body: String, status: StatusCode) -> String {
    if body.trim().is_empty() {
        status.to_string()
    } else {
        body
    }
}
