// src/jobs/validators.rs

use super::models::*;
use crate::common::validation::require;
use crate::common::{ValidationResult, Validator};

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;
pub const MAX_REQUIREMENTS: usize = 50;
pub const MAX_PAGE_SIZE: u32 = 100;

// ============================================================================
// Job Validators
// ============================================================================

pub struct JobValidator;

impl Validator<CreateJob> for JobValidator {
    fn validate(&self, data: &CreateJob) -> ValidationResult {
        let mut result = ValidationResult::new();

        validate_title(&mut result, &data.title);
        if require(&mut result, "description", &data.description, "Description") {
            validate_description(&mut result, &data.description);
        }
        validate_requirements(&mut result, &data.requirements);

        result
    }
}

impl Validator<UpdateJob> for JobValidator {
    fn validate(&self, data: &UpdateJob) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.is_empty() {
            result.add_error("job", "Nothing to update");
        }
        if let Some(title) = &data.title {
            validate_title(&mut result, title);
        }
        if let Some(description) = &data.description {
            validate_description(&mut result, description);
        }
        if let Some(requirements) = &data.requirements {
            validate_requirements(&mut result, requirements);
        }

        result
    }
}

pub struct JobSearchValidator;

impl Validator<JobSearch> for JobSearchValidator {
    fn validate(&self, data: &JobSearch) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.page == 0 {
            result.add_error("page", "Page numbers start at 1");
        }
        if data.limit == 0 || data.limit > MAX_PAGE_SIZE {
            result.add_error(
                "limit",
                &format!("Limit must be between 1 and {MAX_PAGE_SIZE}"),
            );
        }

        result
    }
}

fn validate_title(result: &mut ValidationResult, title: &str) {
    if require(result, "title", title, "Title") && title.chars().count() > MAX_TITLE_LENGTH {
        result.add_error(
            "title",
            &format!("Title must be less than {MAX_TITLE_LENGTH} characters"),
        );
    }
}

fn validate_description(result: &mut ValidationResult, description: &str) {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        result.add_error(
            "description",
            &format!("Description must be less than {MAX_DESCRIPTION_LENGTH} characters"),
        );
    }
}

fn validate_requirements(result: &mut ValidationResult, requirements: &[String]) {
    if requirements.len() > MAX_REQUIREMENTS {
        result.add_error(
            "requirements",
            &format!("At most {MAX_REQUIREMENTS} requirements are allowed"),
        );
    }
    if requirements.iter().any(|r| r.trim().is_empty()) {
        result.add_error("requirements", "Requirements cannot be blank");
    }
}
