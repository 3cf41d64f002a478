// src/recruiters/validators.rs

use super::models::ApplicationReview;
use crate::candidates::ApplicationStatus;
use crate::common::{ValidationResult, Validator};
use crate::interviews::models::CreateInterview;

pub const MAX_FEEDBACK_LENGTH: usize = 2_000;
pub const MAX_INTERVIEW_MINUTES: u32 = 240;

pub struct ReviewValidator;

impl Validator<ApplicationReview> for ReviewValidator {
    fn validate(&self, data: &ApplicationReview) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.status == ApplicationStatus::Pending {
            result.add_error("status", "A review must move the application out of pending");
        }
        if let Some(feedback) = &data.feedback {
            if feedback.chars().count() > MAX_FEEDBACK_LENGTH {
                result.add_error(
                    "feedback",
                    &format!("Feedback must be less than {MAX_FEEDBACK_LENGTH} characters"),
                );
            }
        }

        result
    }
}

pub struct InterviewScheduleValidator;

impl Validator<CreateInterview> for InterviewScheduleValidator {
    fn validate(&self, data: &CreateInterview) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.duration_minutes == 0 || data.duration_minutes > MAX_INTERVIEW_MINUTES {
            result.add_error(
                "duration_minutes",
                &format!("Duration must be between 1 and {MAX_INTERVIEW_MINUTES} minutes"),
            );
        }
        if data.total_questions == 0 {
            result.add_error("total_questions", "An interview needs at least one question");
        }
        if let Some(at) = data.scheduled_at {
            if at < chrono::Utc::now() {
                result.add_error("scheduled_at", "Interview cannot be scheduled in the past");
            }
        }

        result
    }
}
