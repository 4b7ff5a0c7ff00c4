use std::sync::OnceLock;

use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

impl Validator {
    /// Guards the `jobs.title` column (VARCHAR(255))
    pub fn validate_job_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::BadRequest("Job title cannot be empty".to_string()));
        }
        if title.chars().count() > 255 {
            return Err(AppError::BadRequest(
                "Job title too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_required(field: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::BadRequest(format!("{} cannot be empty", field)));
        }
        Ok(())
    }

    pub fn validate_email(email: &str) -> Result<(), AppError> {
        if !email_regex().is_match(email) {
            return Err(AppError::BadRequest(format!(
                "Invalid email address: {}",
                email
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_title_bounds() {
        assert!(Validator::validate_job_title("AC repair").is_ok());
        assert!(Validator::validate_job_title("   ").is_err());
        assert!(Validator::validate_job_title(&"x".repeat(256)).is_err());
    }

    #[test]
    fn test_job_title_counts_characters() {
        // 255 two-byte characters fit VARCHAR(255)
        assert!(Validator::validate_job_title(&"é".repeat(255)).is_ok());
        assert!(Validator::validate_job_title(&"é".repeat(256)).is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(Validator::validate_email("adams@yopmail.com").is_ok());
        assert!(Validator::validate_email("adams.yopmail.com").is_err());
        assert!(Validator::validate_email("a b@c.d").is_err());
    }
}
