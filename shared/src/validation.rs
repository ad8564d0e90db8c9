//! Synchronous field checks run before any request leaves the browser.
//!
//! Each form validates into either the request body it will send or a struct
//! of per-field errors. Error `Display` strings are the inline messages shown
//! under the offending input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{ForgotPasswordRequest, LoginRequest, RegisterRequest};

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_NAME_LENGTH: usize = 3;

/// Requirements listed next to the signup password field
pub const PASSWORD_RULES: [&str; 3] = [
    "At least 6 characters",
    "One uppercase letter",
    "One number",
];

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("Email or username is required")]
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("Name is required")]
    Required,
    #[error("Name must be at least {min} characters")]
    TooShort { min: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Email is required")]
    Required,
    #[error("Please enter a valid email address")]
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("Password is required")]
    Required,
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,
    #[error("Password must contain at least one number")]
    MissingDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfirmPasswordError {
    #[error("Passwords do not match")]
    Mismatch,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `local@domain.tld` shape check. Deliberately loose; the server has the
/// final word.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if is_blank(email) {
        return Err(EmailError::Required);
    }
    if !is_valid_email(email) {
        return Err(EmailError::Invalid);
    }
    Ok(())
}

/// Blank names are missing; the length check counts the name as typed.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if is_blank(name) {
        return Err(NameError::Required);
    }
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(NameError::TooShort { min: MIN_NAME_LENGTH });
    }
    Ok(())
}

/// Login only checks presence and length; composition is enforced at signup.
pub fn validate_login_password(password: &str) -> Result<(), PasswordError> {
    if is_blank(password) {
        return Err(PasswordError::Required);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort { min: MIN_PASSWORD_LENGTH });
    }
    Ok(())
}

/// Reports the first rule the password breaks
pub fn validate_new_password(password: &str) -> Result<(), PasswordError> {
    validate_login_password(password)?;
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordError::MissingDigit);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email_or_username: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormErrors {
    pub email_or_username: Option<IdentifierError>,
    pub password: Option<PasswordError>,
}

impl LoginFormErrors {
    pub fn is_empty(&self) -> bool {
        self.email_or_username.is_none() && self.password.is_none()
    }
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, LoginFormErrors> {
        let errors = LoginFormErrors {
            email_or_username: is_blank(&self.email_or_username).then_some(IdentifierError::Required),
            password: validate_login_password(&self.password).err(),
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(LoginRequest {
            email_or_username: self.email_or_username.clone(),
            password: self.password.clone(),
            remember_me: self.remember_me,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupFormErrors {
    pub name: Option<NameError>,
    pub email: Option<EmailError>,
    pub password: Option<PasswordError>,
    pub confirm_password: Option<ConfirmPasswordError>,
}

impl SignupFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

impl SignupForm {
    /// Every field is checked so all inline errors show at once. The
    /// confirmation is compared even when the password itself is invalid.
    pub fn validate(&self) -> Result<RegisterRequest, SignupFormErrors> {
        let errors = SignupFormErrors {
            name: validate_name(&self.name).err(),
            email: validate_email(&self.email).err(),
            password: validate_new_password(&self.password).err(),
            confirm_password: (self.password != self.confirm_password)
                .then_some(ConfirmPasswordError::Mismatch),
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

pub fn validate_forgot_password(email: &str) -> Result<ForgotPasswordRequest, EmailError> {
    validate_email(email)?;
    Ok(ForgotPasswordRequest {
        email: email.to_string(),
    })
}
