//! Client configuration and timeout defaults

mod client;
pub mod timeouts;

pub use client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, API_KEY_ENV};
