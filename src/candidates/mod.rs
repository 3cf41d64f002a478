// src/candidates/mod.rs
//! # Candidates Module
//!
//! Candidate-side calls:
//! - list and inspect own applications
//! - apply to a job with an optional cover letter
//! - upload a PDF resume

pub mod api;
pub mod models;
pub mod validators;


pub use api::CandidatesApi;
pub use models::{Application, ApplicationStatus, ApplyRequest, ResumeUpload};
