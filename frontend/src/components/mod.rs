pub mod dashboard;
pub mod forgot_password_page;
pub mod forms;
pub mod login_page;
pub mod not_found;
pub mod profile_selection;
pub mod signup_page;
pub mod theme;
