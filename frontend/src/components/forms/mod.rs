pub mod form_message;
pub mod submit_button;
pub mod text_field;
