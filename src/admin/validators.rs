// src/admin/validators.rs

use super::models::{BackupFile, LogQuery};
use crate::common::{ValidationResult, Validator};

pub struct BackupFileValidator;

impl Validator<BackupFile> for BackupFileValidator {
    fn validate(&self, data: &BackupFile) -> ValidationResult {
        let mut result = ValidationResult::new();

        if !data.file_name.to_lowercase().ends_with(".json") {
            result.add_error("backup", "Please select a valid backup file (.json)");
        } else if serde_json::from_slice::<serde_json::Value>(&data.bytes).is_err() {
            result.add_error("backup", "Backup file is not valid JSON");
        }

        result
    }
}

pub struct LogQueryValidator;

impl Validator<LogQuery> for LogQueryValidator {
    fn validate(&self, data: &LogQuery) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let (Some(start), Some(end)) = (data.start_date, data.end_date) {
            if start > end {
                result.add_error("start_date", "Start date must be before end date");
            }
        }

        result
    }
}
