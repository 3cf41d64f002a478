// src/jobs/mod.rs
//! Job listings: browse, search and (for recruiters) post and edit jobs.

pub mod api;
pub mod models;
pub mod validators;

#[cfg(test)]
mod tests;

pub use api::JobsApi;
pub use models::{CreateJob, Job, JobSearch, JobStatus, UpdateJob};
