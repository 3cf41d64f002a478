// src/candidates/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};

pub const MAX_COVER_LETTER_LENGTH: usize = 5_000;
pub const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

const PDF_MAGIC: &[u8] = b"%PDF";

pub struct ApplicationValidator;

impl Validator<ApplyRequest> for ApplicationValidator {
    fn validate(&self, data: &ApplyRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(letter) = &data.cover_letter {
            if letter.chars().count() > MAX_COVER_LETTER_LENGTH {
                result.add_error(
                    "cover_letter",
                    &format!("Cover letter must be less than {MAX_COVER_LETTER_LENGTH} characters"),
                );
            }
        }

        result
    }
}

/// The backend only extracts text from PDF resumes.
pub struct ResumeValidator;

impl Validator<ResumeUpload> for ResumeValidator {
    fn validate(&self, data: &ResumeUpload) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.bytes.is_empty() {
            result.add_error("resume", "Resume file is empty");
            return result;
        }
        if data.bytes.len() > MAX_RESUME_BYTES {
            result.add_error("resume", "Resume must be smaller than 10 MB");
        }
        if !data.file_name.to_lowercase().ends_with(".pdf") || !data.bytes.starts_with(PDF_MAGIC) {
            result.add_error("resume", "Resume must be a PDF file");
        }

        result
    }
}
