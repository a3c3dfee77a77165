//! HttpRemoteApi - REST implementation of `RemoteApi`.
//!
//! Talks JSON over HTTP to the CRM backend. Non-success responses are mapped
//! to `HcpLogError::Api`, keeping the server's `detail` field when present.

use async_trait::async_trait;
use hcp_log_core::api::{
    ChatTurnRequest, ChatTurnResponse, CreateInteractionRequest, EditTurnRequest,
    EditTurnResponse, RemoteApi,
};
use hcp_log_core::config::ClientConfig;
use hcp_log_core::error::{HcpLogError, Result};
use hcp_log_core::hcp::{Hcp, HcpId};
use hcp_log_core::interaction::{Interaction, InteractionId};
use hcp_log_core::tool_trace::ToolRun;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Client for the CRM backend's HTTP API.
#[derive(Clone)]
pub struct HttpRemoteApi {
    client: Client,
    base_url: String,
}

impl HttpRemoteApi {
    /// Creates a client with default transport settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    /// Creates a client from the loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| HcpLogError::config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: normalize_base_url(config.base_url.clone()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Checks the backend's `/health` endpoint.
    pub async fn health(&self) -> Result<bool> {
        let body: Value = self.get_json("/health").await?;
        Ok(body.get("status").and_then(Value::as_str) == Some("ok"))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!("[HttpRemoteApi] GET {}", path);
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|err| transport_error("GET", path, err))?;

        decode_response(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!("[HttpRemoteApi] POST {}", path);
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|err| transport_error("POST", path, err))?;

        decode_response(response).await
    }
}

#[async_trait]
impl RemoteApi for HttpRemoteApi {
    async fn list_hcps(&self) -> Result<Vec<Hcp>> {
        self.get_json("/hcps/").await
    }

    async fn get_hcp(&self, hcp_id: HcpId) -> Result<Hcp> {
        self.get_json(&format!("/hcps/{hcp_id}")).await
    }

    async fn create_interaction(&self, request: &CreateInteractionRequest) -> Result<Interaction> {
        self.post_json("/interactions/", request).await
    }

    async fn get_interaction(&self, interaction_id: InteractionId) -> Result<Interaction> {
        self.get_json(&format!("/interactions/{interaction_id}"))
            .await
    }

    async fn list_interactions(&self) -> Result<Vec<Interaction>> {
        self.get_json("/interactions/").await
    }

    async fn chat_turn(&self, request: &ChatTurnRequest) -> Result<ChatTurnResponse> {
        self.post_json("/agent/chat", request).await
    }

    async fn edit_turn(&self, request: &EditTurnRequest) -> Result<EditTurnResponse> {
        self.post_json("/agent/edit", request).await
    }

    async fn list_tool_runs(&self) -> Result<Vec<ToolRun>> {
        self.get_json("/agent/tool-runs").await
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

fn transport_error(method: &str, path: &str, err: reqwest::Error) -> HcpLogError {
    tracing::warn!("[HttpRemoteApi] {} {} failed: {}", method, path, err);
    HcpLogError::transport(err.to_string())
}

async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body_text = response.text().await.unwrap_or_default();
        return Err(map_http_error(status, &body_text));
    }

    response.json().await.map_err(|err| HcpLogError::Serialization {
        format: "JSON".to_string(),
        message: format!("Failed to parse response: {err}"),
    })
}

fn map_http_error(status: StatusCode, body: &str) -> HcpLogError {
    let detail = extract_detail(body);
    tracing::warn!(
        "[HttpRemoteApi] Request failed with status {}: {}",
        status.as_u16(),
        detail.as_deref().unwrap_or("<no detail>")
    );
    HcpLogError::api(status.as_u16(), detail)
}

/// Pulls the `detail` field out of an error body.
///
/// Plain strings are returned as-is. Validation errors arrive as a list of
/// objects; their `msg` entries are joined with "; ".
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                Some(Value::Array(items.clone()).to_string())
            } else {
                Some(messages.join("; "))
            }
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_string_detail() {
        assert_eq!(
            extract_detail(r#"{"detail": "HCP not found"}"#).as_deref(),
            Some("HCP not found")
        );
    }

    #[test]
    fn test_extract_validation_detail() {
        let body = r#"{"detail": [
            {"loc": ["body", "hcp_id"], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["body", "message"], "msg": "str type expected", "type": "type_error.str"}
        ]}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some("field required; str type expected")
        );
    }

    #[test]
    fn test_extract_detail_missing_or_not_json() {
        assert_eq!(extract_detail(r#"{"error": "nope"}"#), None);
        assert_eq!(extract_detail("Internal Server Error"), None);
        assert_eq!(extract_detail(r#"{"detail": null}"#), None);
    }

    #[test]
    fn test_map_http_error_keeps_status() {
        let err = map_http_error(StatusCode::BAD_REQUEST, r#"{"detail": "hcp_id is required"}"#);
        assert_eq!(
            err,
            HcpLogError::Api {
                status: 400,
                detail: Some("hcp_id is required".to_string()),
                message: "Request failed with status code 400".to_string(),
            }
        );
    }

    #[test]
    fn test_base_url_is_normalized() {
        let api = HttpRemoteApi::new("http://localhost:8000/");
        assert_eq!(api.base_url(), "http://localhost:8000");
        assert_eq!(api.url("/hcps/"), "http://localhost:8000/hcps/");
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            base_url: "http://crm.internal:9000".to_string(),
            ..ClientConfig::default()
        };
        let api = HttpRemoteApi::from_config(&config).unwrap();
        assert_eq!(api.base_url(), "http://crm.internal:9000");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        let api = HttpRemoteApi::new("http://127.0.0.1:9");
        let err = api.list_hcps().await.unwrap_err();
        assert!(err.is_transport());
    }
}
