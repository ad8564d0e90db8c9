//! Typed wrappers over the authentication and profile endpoints.

use serde_json::Value;
use shared::{
    ApiError, ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest,
    SetProfileRequest, SetProfileResponse,
};

use super::api::ApiClient;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const FORGOT_PASSWORD_PATH: &str = "/auth/forgot-password";
pub const SET_PROFILE_PATH: &str = "/user/set-profile";

pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    client.post_json(LOGIN_PATH, request).await
}

/// The register response has no fixed shape; it is passed through untouched.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<Option<Value>, ApiError> {
    client.post(REGISTER_PATH, request).await
}

pub async fn forgot_password(
    client: &ApiClient,
    request: &ForgotPasswordRequest,
) -> Result<Option<Value>, ApiError> {
    client.post(FORGOT_PASSWORD_PATH, request).await
}

pub async fn set_profile(
    client: &ApiClient,
    request: &SetProfileRequest,
) -> Result<SetProfileResponse, ApiError> {
    client.post_json(SET_PROFILE_PATH, request).await
}
