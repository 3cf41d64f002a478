// src/ai/mod.rs
//! AI endpoints: job description drafting, resume analysis and interview
//! question generation.

pub mod api;
pub mod models;

#[cfg(test)]
mod tests;

pub use api::AiApi;
