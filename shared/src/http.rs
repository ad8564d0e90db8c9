//! Transport-independent half of the API client: request descriptors and the
//! mapping from a finished HTTP exchange to a result.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::ErrorResponse;

/// Message used when a failing response carries no readable error body
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single API call, built fresh for every request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: &str) -> Self {
        Self::without_body(HttpMethod::Get, path)
    }

    pub fn delete(path: &str) -> Self {
        Self::without_body(HttpMethod::Delete, path)
    }

    pub fn post<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Self, ApiError> {
        Self::with_body(HttpMethod::Post, path, body)
    }

    pub fn put<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Self, ApiError> {
        Self::with_body(HttpMethod::Put, path, body)
    }

    fn without_body(method: HttpMethod, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            body: None,
        }
    }

    fn with_body<B: Serialize + ?Sized>(
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        // A null payload is sent as no body at all
        let body = if body.is_null() { None } else { Some(body) };
        Ok(Self {
            method,
            path: path.to_string(),
            body,
        })
    }

    /// Absolute URL of this request against `base_url`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path)
    }

    /// Serialized body, if any
    pub fn body_text(&self) -> Option<String> {
        self.body.as_ref().map(Value::to_string)
    }
}

/// Failure of an API call. `Display` renders the human-readable message only,
/// which is what screens put in their error banner.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status
    #[error("{message}")]
    Http {
        path: String,
        status: u16,
        message: String,
    },
    /// The request never produced a response
    #[error("{message}")]
    Transport { path: String, message: String },
    /// A 2xx body could not be parsed into the expected shape
    #[error("{message}")]
    Decode { path: String, message: String },
    /// The request payload could not be serialized
    #[error("{message}")]
    Encode { path: String, message: String },
}

impl ApiError {
    pub fn path(&self) -> &str {
        match self {
            ApiError::Http { path, .. }
            | ApiError::Transport { path, .. }
            | ApiError::Decode { path, .. }
            | ApiError::Encode { path, .. } => path,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Http { message, .. }
            | ApiError::Transport { message, .. }
            | ApiError::Decode { message, .. }
            | ApiError::Encode { message, .. } => message,
        }
    }

    /// HTTP status, when the server responded at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Turn a completed response into the call's result.
///
/// - 2xx with 204: `Ok(None)`, the body is never looked at
/// - other 2xx: the body parsed as JSON
/// - non-2xx: an [`ApiError::Http`] whose message is the body's `message`
///   field, `"Error {status}"` when the JSON has none, or
///   [`UNKNOWN_ERROR_MESSAGE`] when the body is not JSON
pub fn interpret_response(path: &str, status: u16, body: &str) -> Result<Option<Value>, ApiError> {
    if (200..300).contains(&status) {
        if status == 204 {
            return Ok(None);
        }
        return serde_json::from_str(body).map(Some).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        });
    }

    Err(ApiError::Http {
        path: path.to_string(),
        status,
        message: error_message(status, body),
    })
}

fn error_message(status: u16, body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return UNKNOWN_ERROR_MESSAGE.to_string();
    };

    serde_json::from_value::<ErrorResponse>(value)
        .ok()
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("Error {}", status))
}

/// Decode a response body into the shape the caller expects. An absent body
/// decodes as JSON `null`.
pub fn decode_body<T: DeserializeOwned>(path: &str, body: Option<Value>) -> Result<T, ApiError> {
    serde_json::from_value(body.unwrap_or(Value::Null)).map_err(|e| ApiError::Decode {
        path: path.to_string(),
        message: format!("Unexpected response from server: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LoginRequest, LoginResponse, SetProfileResponse};
    use serde_json::json;

    #[test]
    fn test_success_returns_parsed_body() {
        let result = interpret_response("/auth/login", 200, r#"{"token":"t1","user":{"id":"1","name":"A","email":"a@b.com"}}"#);
        let body = result.unwrap().unwrap();
        assert_eq!(body["token"], "t1");
    }

    #[test]
    fn test_no_content_returns_none_without_parsing() {
        assert_eq!(interpret_response("/auth/forgot-password", 204, "").unwrap(), None);
        // Even a garbage body is ignored for 204
        assert_eq!(interpret_response("/auth/forgot-password", 204, "not json").unwrap(), None);
    }

    #[test]
    fn test_success_with_malformed_body_is_decode_error() {
        let err = interpret_response("/auth/register", 201, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert_eq!(err.path(), "/auth/register");
    }

    #[test]
    fn test_failure_uses_message_field() {
        let err = interpret_response("/auth/login", 401, r#"{"message":"Invalid credentials","statusCode":401}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.path(), "/auth/login");
    }

    #[test]
    fn test_failure_with_non_json_body_uses_fallback() {
        let err = interpret_response("/auth/login", 502, "Bad Gateway").unwrap_err();
        assert_eq!(err.message(), UNKNOWN_ERROR_MESSAGE);

        let err = interpret_response("/auth/login", 500, "").unwrap_err();
        assert_eq!(err.message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_failure_with_json_but_no_message_uses_status() {
        let err = interpret_response("/user/set-profile", 403, r#"{"error":"forbidden"}"#).unwrap_err();
        assert_eq!(err.message(), "Error 403");

        let err = interpret_response("/user/set-profile", 400, r#"{"message":""}"#).unwrap_err();
        assert_eq!(err.message(), "Error 400");

        let err = interpret_response("/user/set-profile", 400, r#""just a string""#).unwrap_err();
        assert_eq!(err.message(), "Error 400");
    }

    #[test]
    fn test_request_descriptors() {
        let get = ApiRequest::get("/auth/me");
        assert_eq!(get.method, HttpMethod::Get);
        assert_eq!(get.body, None);
        assert_eq!(get.url("http://localhost:8080/api"), "http://localhost:8080/api/auth/me");

        let post = ApiRequest::post(
            "/auth/login",
            &LoginRequest {
                email_or_username: "a@b.com".to_string(),
                password: "secret".to_string(),
                remember_me: false,
            },
        )
        .unwrap();
        assert_eq!(post.method.as_str(), "POST");
        assert_eq!(
            post.body,
            Some(json!({"emailOrUsername": "a@b.com", "password": "secret", "rememberMe": false}))
        );

        let put = ApiRequest::put("/user/settings", &()).unwrap();
        assert_eq!(put.body, None);
        assert_eq!(put.body_text(), None);

        assert_eq!(ApiRequest::delete("/user/session").method.to_string(), "DELETE");
    }

    #[test]
    fn test_decode_body_into_expected_shape() {
        let body = Some(json!({"token": "t1", "user": {"id": "1", "name": "A", "email": "a@b.com"}}));
        let response: LoginResponse = decode_body("/auth/login", body).unwrap();
        assert_eq!(response.token.as_deref(), Some("t1"));

        let lenient: LoginResponse =
            decode_body("/auth/login", Some(json!({"token": "t1", "user": {"id": 1}}))).unwrap();
        assert_eq!(lenient.session_token(), Some("t1"));

        let err = decode_body::<LoginResponse>("/auth/login", Some(json!(["t1"]))).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));

        let details: SetProfileResponse = decode_body("/user/set-profile", Some(json!({}))).unwrap();
        assert_eq!(details.profile_details, None);

        let nothing: Option<Value> = decode_body("/auth/forgot-password", None).unwrap();
        assert_eq!(nothing, None);
    }
}
