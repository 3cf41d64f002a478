// src/admin/mod.rs
//! # Admin Module
//!
//! Administration console:
//! - user listing and system statistics
//! - error and AI log review
//! - backup, restore and maintenance actions

pub mod api;
pub mod models;
pub mod validators;


pub use api::AdminApi;
pub use models::{LogQuery, MaintenanceAction, SystemStats, UserFilter};
