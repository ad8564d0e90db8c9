use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod http;
pub mod validation;

pub use http::{decode_body, interpret_response, ApiError, ApiRequest, HttpMethod, UNKNOWN_ERROR_MESSAGE};

/// Request body for `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email_or_username: String,
    pub password: String,
    pub remember_me: bool,
}

/// Response after a successful login. Only the token is read; the user
/// record is kept as whatever JSON the server sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Session token; some deployments rely on a cookie instead and omit it
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

impl LoginResponse {
    /// The token worth persisting. An empty string counts as none.
    pub fn session_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }

    /// Best-effort display name for logs: email, then username, then name
    pub fn user_label(&self) -> Option<&str> {
        let user = self.user.as_ref()?;
        ["email", "username", "name"]
            .iter()
            .find_map(|key| user.get(*key).and_then(|v| v.as_str()))
    }
}

/// Request body for `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/forgot-password`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Request body for `POST /user/set-profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetProfileRequest {
    pub profile: Profile,
}

/// Response after selecting a profile. The details are free-form and only
/// forwarded to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetProfileResponse {
    #[serde(default)]
    pub profile_details: Option<serde_json::Value>,
}

/// Error body the API sends alongside non-2xx statuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
}

/// Role a user acts as after logging in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Coordinator,
    Teacher,
    Admin,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Coordinator, Profile::Teacher, Profile::Admin];

    /// Wire and storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Coordinator => "coordinator",
            Profile::Teacher => "teacher",
            Profile::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Profile::Coordinator => "Coordinator",
            Profile::Teacher => "Teacher",
            Profile::Admin => "Administrator",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Profile::Coordinator => "Manage courses, classes and teachers",
            Profile::Teacher => "Record grades and follow your classes",
            Profile::Admin => "Manage users and system settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Profile::Coordinator => "👥",
            Profile::Teacher => "📖",
            Profile::Admin => "⚙️",
        }
    }

    /// Client-side route of the dashboard for this profile
    pub fn dashboard_path(&self) -> String {
        format!("/dashboard/{}", self.as_str())
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown profile: {0}")]
pub struct ProfileParseError(pub String);

impl FromStr for Profile {
    type Err = ProfileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coordinator" => Ok(Profile::Coordinator),
            "teacher" => Ok(Profile::Teacher),
            "admin" => Ok(Profile::Admin),
            other => Err(ProfileParseError(other.to_string())),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix every API path is appended to
    pub api_base_url: String,
    pub token_storage_key: String,
    pub profile_storage_key: String,
}

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_storage_key: "authToken".to_string(),
            profile_storage_key: "userProfile".to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration with the base URL overridden when `base_url` is
    /// present and non-blank. Trailing slashes are dropped since every path
    /// starts with one.
    pub fn with_base_url(base_url: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_request_uses_camel_case() {
        let request = LoginRequest {
            email_or_username: "a@b.com".to_string(),
            password: "secret".to_string(),
            remember_me: true,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"emailOrUsername": "a@b.com", "password": "secret", "rememberMe": true})
        );
    }

    #[test]
    fn test_login_response_token_is_optional() {
        let with_token: LoginResponse = serde_json::from_value(json!({
            "token": "t1",
            "user": {"id": "1", "name": "Ana", "email": "a@b.com"}
        }))
        .unwrap();
        assert_eq!(with_token.token.as_deref(), Some("t1"));

        let without_token: LoginResponse = serde_json::from_value(json!({
            "user": {"id": "1", "name": "Ana", "email": "a@b.com"}
        }))
        .unwrap();
        assert_eq!(without_token.token, None);
        assert_eq!(without_token.user_label(), Some("a@b.com"));
    }

    #[test]
    fn test_login_response_accepts_any_user_shape() {
        let numeric_id: LoginResponse = serde_json::from_value(json!({
            "token": "t1",
            "user": {"id": 1, "email": "a@b.com"}
        }))
        .unwrap();
        assert_eq!(numeric_id.session_token(), Some("t1"));
        assert_eq!(numeric_id.user.as_ref().unwrap()["id"], 1);

        let username_only: LoginResponse = serde_json::from_value(json!({
            "token": "t1",
            "user": {"username": "ana"}
        }))
        .unwrap();
        assert_eq!(username_only.user_label(), Some("ana"));

        let token_only: LoginResponse = serde_json::from_value(json!({"token": "t1"})).unwrap();
        assert_eq!(token_only.user, None);
        assert_eq!(token_only.user_label(), None);
    }

    #[test]
    fn test_empty_token_is_not_a_session() {
        let response: LoginResponse = serde_json::from_value(json!({"token": "", "user": {}})).unwrap();
        assert_eq!(response.token.as_deref(), Some(""));
        assert_eq!(response.session_token(), None);
    }

    #[test]
    fn test_set_profile_request_serializes_lowercase() {
        let request = SetProfileRequest { profile: Profile::Teacher };
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({"profile": "teacher"}));
    }

    #[test]
    fn test_set_profile_response_keeps_details() {
        let response: SetProfileResponse = serde_json::from_value(json!({
            "profileDetails": {"classes": 4}
        }))
        .unwrap();
        assert_eq!(response.profile_details, Some(json!({"classes": 4})));

        let empty: SetProfileResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.profile_details, None);
    }

    #[test]
    fn test_profile_parse_and_display() {
        for profile in Profile::ALL {
            assert_eq!(profile.to_string().parse::<Profile>().unwrap(), profile);
        }
        assert!("student".parse::<Profile>().is_err());
        assert!("Teacher".parse::<Profile>().is_err());
    }

    #[test]
    fn test_profile_dashboard_path() {
        assert_eq!(Profile::Coordinator.dashboard_path(), "/dashboard/coordinator");
        assert_eq!(Profile::Teacher.dashboard_path(), "/dashboard/teacher");
        assert_eq!(Profile::Admin.dashboard_path(), "/dashboard/admin");
    }

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.token_storage_key, "authToken");
        assert_eq!(config.profile_storage_key, "userProfile");
    }

    #[test]
    fn test_client_config_base_url_override() {
        assert_eq!(
            ClientConfig::with_base_url(Some("https://grades.example.org/api/")).api_base_url,
            "https://grades.example.org/api"
        );
        assert_eq!(ClientConfig::with_base_url(Some("  ")).api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(ClientConfig::with_base_url(None).api_base_url, DEFAULT_API_BASE_URL);
    }
}
