// src/lib.rs
//! # recruit
//!
//! Client for the recruitment platform backend. Holds the signed-in
//! session, attaches the bearer credential to every request, reacts to
//! rejected credentials by signing out, and gates role-specific views.

pub mod admin;
pub mod ai;
pub mod auth;
pub mod candidates;
pub mod client;
pub mod common;
pub mod interviews;
pub mod jobs;
pub mod navigation;
pub mod recruiters;
pub mod session;

#[cfg(test)]
mod testing;

pub use common::{ApiError, AppState, ClientConfig};
