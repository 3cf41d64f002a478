// src/recruiters/mod.rs
//! Recruiter workflows: review applications to their jobs and schedule
//! interviews.

pub mod api;
pub mod models;
pub mod validators;


pub use api::RecruitersApi;
pub use models::{ApplicationFilter, ApplicationReview, InterviewFilter};
