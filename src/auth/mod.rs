//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Login (OAuth2 form or JSON contract) and registration
//! - JWT claim decoding and expiry checks
//! - Logout, password reset/update and profile updates
//! - Client-side validation of the auth forms

pub mod models;
pub mod service;
pub mod token;
pub mod validators;


pub use models::{Claims, RegisterRequest};
pub use service::AuthService;
