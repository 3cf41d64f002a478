// src/auth/validators.rs

use super::models::*;
use crate::common::validation::{is_valid_email, require};
use crate::common::{ValidationResult, Validator};

pub const MIN_PASSWORD_LENGTH: usize = 8;

// ============================================================================
// Login
// ============================================================================

pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

pub struct LoginValidator;

impl Validator<Credentials<'_>> for LoginValidator {
    fn validate(&self, data: &Credentials<'_>) -> ValidationResult {
        let mut result = ValidationResult::new();

        if require(&mut result, "email", data.email, "Email") && !is_valid_email(data.email) {
            result.add_error("email", "Email address is invalid");
        }
        require(&mut result, "password", data.password, "Password");

        result
    }
}

// ============================================================================
// Registration
// ============================================================================

pub struct RegistrationValidator;

impl Validator<RegisterRequest> for RegistrationValidator {
    fn validate(&self, data: &RegisterRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if require(&mut result, "email", &data.email, "Email") && !is_valid_email(&data.email) {
            result.add_error("email", "Email address is invalid");
        }

        require(&mut result, "full_name", &data.full_name, "Full name");

        if data.password.chars().count() < MIN_PASSWORD_LENGTH {
            result.add_error(
                "password",
                &format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
            );
        }

        result
    }
}

// ============================================================================
// Password management
// ============================================================================

pub struct PasswordResetValidator;

impl Validator<PasswordResetRequest> for PasswordResetValidator {
    fn validate(&self, data: &PasswordResetRequest) -> ValidationResult {
        let mut result = ValidationResult::new();
        if require(&mut result, "email", &data.email, "Email") && !is_valid_email(&data.email) {
            result.add_error("email", "Email address is invalid");
        }
        result
    }
}

pub struct PasswordUpdateValidator;

impl Validator<PasswordUpdateRequest> for PasswordUpdateValidator {
    fn validate(&self, data: &PasswordUpdateRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        require(
            &mut result,
            "current_password",
            &data.current_password,
            "Current password",
        );

        if data.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            result.add_error(
                "new_password",
                &format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
            );
        } else if data.new_password == data.current_password {
            result.add_error(
                "new_password",
                "New password must differ from the current password",
            );
        }

        result
    }
}

pub struct ProfileUpdateValidator;

impl Validator<ProfileUpdate> for ProfileUpdateValidator {
    fn validate(&self, data: &ProfileUpdate) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.full_name.is_none() && data.email.is_none() {
            result.add_error("profile", "Nothing to update");
        }
        if let Some(name) = &data.full_name {
            require(&mut result, "full_name", name, "Full name");
        }
        if let Some(email) = &data.email {
            if !is_valid_email(email) {
                result.add_error("email", "Email address is invalid");
            }
        }

        result
    }
}
