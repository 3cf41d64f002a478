//! # Client Module
//!
//! The single HTTP entry point for the platform backend:
//! - `pipeline`: pure request/response steps (auth attachment, error
//!   extraction, payload parsing)
//! - `api_client`: `ApiClient`, which runs those steps around each call and
//!   applies the 401 / toast reactions

pub mod api_client;
pub mod pipeline;

#[cfg(test)]
mod tests;

pub use api_client::ApiClient;
pub use pipeline::{attach_auth, extract_error_message, interpret_response, ResponseOutcome};
