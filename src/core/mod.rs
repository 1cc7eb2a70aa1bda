pub mod app;
pub mod config;
pub mod constants;
pub mod message;
pub mod panel;
pub mod text_wrapping;
