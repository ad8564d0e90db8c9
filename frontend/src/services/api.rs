use gloo::net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::{decode_body, interpret_response, ApiError, ApiRequest, ClientConfig, HttpMethod};
use web_sys::RequestCredentials;

use crate::services::config::client_config;
use crate::services::logging::Logger;

/// API client for communicating with the backend server.
///
/// Holds nothing but the base URL; every call is independent. Failures are
/// logged here once and then handed to the caller.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from the build-time configuration
    pub fn new() -> Self {
        Self::from_config(&client_config())
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> Result<Option<Value>, ApiError> {
        self.send(ApiRequest::get(path)).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Option<Value>, ApiError> {
        let request = ApiRequest::post(path, body).map_err(log_failure)?;
        self.send(request).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Option<Value>, ApiError> {
        let request = ApiRequest::put(path, body).map_err(log_failure)?;
        self.send(request).await
    }

    pub async fn delete(&self, path: &str) -> Result<Option<Value>, ApiError> {
        self.send(ApiRequest::delete(path)).await
    }

    /// POST and decode the success body into `T`
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.post(path, body).await?;
        decode_body(path, value).map_err(log_failure)
    }

    /// Issue a prepared request: one attempt, no retry
    pub async fn send(&self, request: ApiRequest) -> Result<Option<Value>, ApiError> {
        Logger::debug_with_component("api", &format!("{} {}", request.method, request.path));
        self.execute(&request).await.map_err(log_failure)
    }

    async fn execute(&self, request: &ApiRequest) -> Result<Option<Value>, ApiError> {
        let transport_error = |e: gloo::net::Error| ApiError::Transport {
            path: request.path.clone(),
            message: e.to_string(),
        };

        let builder = RequestBuilder::new(&request.url(&self.base_url))
            .method(to_method(request.method))
            .header("Content-Type", "application/json")
            .credentials(RequestCredentials::Include);

        let http_request = match request.body_text() {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(transport_error)?;

        let response = http_request.send().await.map_err(transport_error)?;
        let status = response.status();
        // A body that cannot be read is treated as empty; for error statuses
        // that falls through to the generic message
        let body = response.text().await.unwrap_or_default();

        interpret_response(&request.path, status, &body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn log_failure(error: ApiError) -> ApiError {
    Logger::error_with_component(
        "api",
        &format!("Request to {} failed: {}", error.path(), error),
    );
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::LoginRequest;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_default_client_uses_config_base_url() {
        let client = ApiClient::new();
        assert_eq!(client.base_url(), client_config().api_base_url);
    }

    #[wasm_bindgen_test]
    fn test_custom_base_url() {
        let client = ApiClient::with_base_url("https://grades.example.org/api".to_string());
        assert_eq!(client.base_url(), "https://grades.example.org/api");
        assert_eq!(
            ApiRequest::get("/auth/me").url(client.base_url()),
            "https://grades.example.org/api/auth/me"
        );
    }

    #[wasm_bindgen_test]
    async fn test_unreachable_server_is_transport_error() {
        // Nothing listens on the discard port
        let client = ApiClient::with_base_url("http://127.0.0.1:9/api".to_string());
        let request = LoginRequest {
            email_or_username: "a@b.com".to_string(),
            password: "secret".to_string(),
            remember_me: false,
        };

        let err = client.post("/auth/login", &request).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { .. }));
        assert_eq!(err.path(), "/auth/login");
        assert!(!err.message().is_empty());
    }
}
