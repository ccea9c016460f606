use chrono::NaiveDateTime;

use super::input_validator::{ValidationErrors, ValidationErrorsExt};
use super::password::validate_password;

pub const REQUIRED: &str = "This field is required.";

/// Accepted input formats for `datetime-local` fields.
pub const DATETIME_INPUT_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_required_string(value: &str, field_name: &str, errors: &mut ValidationErrors) {
        if value.trim().is_empty() {
            errors.add_error(field_name, REQUIRED.to_string());
        }
    }

    pub fn validate_max_length(value: &str, max: usize, field_name: &str, errors: &mut ValidationErrors) {
        let len = value.chars().count();
        if len > max {
            errors.add_error(
                field_name,
                format!("Ensure this value has at most {} characters (it has {}).", max, len),
            );
        }
    }

    /// Blank is allowed; anything else must look like `local@domain.tld`.
    pub fn validate_optional_email(email: &str, errors: &mut ValidationErrors) {
        let email = email.trim();
        if email.is_empty() {
            return;
        }

        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !email.chars().any(char::is_whitespace)
            }
            None => false,
        };
        if !valid {
            errors.add_error("email", "Enter a valid email address.".to_string());
        }
    }

    pub fn validate_username(username: &str, errors: &mut ValidationErrors) {
        if username.trim().is_empty() {
            errors.add_error("username", REQUIRED.to_string());
            return;
        }

        Self::validate_max_length(username, 150, "username", errors);

        if !username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
        {
            errors.add_error(
                "username",
                "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
                    .to_string(),
            );
        }
    }

    /// Parses a `datetime-local` value, recording an error when it is blank
    /// or malformed.
    pub fn validate_datetime(value: &str, field_name: &str, errors: &mut ValidationErrors) -> Option<NaiveDateTime> {
        let value = value.trim();
        if value.is_empty() {
            errors.add_error(field_name, REQUIRED.to_string());
            return None;
        }

        let parsed = DATETIME_INPUT_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok());
        if parsed.is_none() {
            errors.add_error(field_name, "Enter a valid date/time.".to_string());
        }
        parsed
    }

    pub fn validate_password_field(password: &str, username: &str, field_name: &str, errors: &mut ValidationErrors) {
        if password.is_empty() {
            errors.add_error(field_name, REQUIRED.to_string());
            return;
        }

        if let Err(problems) = validate_password(password, username) {
            for problem in problems {
                errors.add_error(field_name, problem.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let mut errors = ValidationErrors::new();
        FieldValidator::validate_required_string("   ", "title", &mut errors);
        FieldValidator::validate_required_string("ok", "text", &mut errors);

        assert_eq!(errors["title"], vec![REQUIRED]);
        assert!(!errors.contains_key("text"));
    }

    #[test]
    fn test_max_length_counts_chars() {
        let mut errors = ValidationErrors::new();
        FieldValidator::validate_max_length(&"é".repeat(256), 256, "title", &mut errors);
        assert!(errors.is_empty());

        FieldValidator::validate_max_length(&"é".repeat(257), 256, "title", &mut errors);
        assert_eq!(
            errors["title"],
            vec!["Ensure this value has at most 256 characters (it has 257)."]
        );
    }

    #[test]
    fn test_optional_email() {
        for ok in ["", "a@b.co", "first.last@mail.example.com"] {
            let mut errors = ValidationErrors::new();
            FieldValidator::validate_optional_email(ok, &mut errors);
            assert!(errors.is_empty(), "{} should be accepted", ok);
        }

        for bad in ["not-an-email", "@b.co", "a@b", "a@@b.co", "a b@c.de", "a@.com"] {
            let mut errors = ValidationErrors::new();
            FieldValidator::validate_optional_email(bad, &mut errors);
            assert!(errors.contains_key("email"), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_username_characters() {
        let mut errors = ValidationErrors::new();
        FieldValidator::validate_username("leo.tolstoy+1@ya_ru-x", &mut errors);
        assert!(errors.is_empty());

        FieldValidator::validate_username("leo tolstoy", &mut errors);
        assert!(errors.contains_key("username"));
    }

    #[test]
    fn test_username_required() {
        let mut errors = ValidationErrors::new();
        FieldValidator::validate_username("", &mut errors);
        assert_eq!(errors["username"], vec![REQUIRED]);
    }

    #[test]
    fn test_datetime_formats() {
        let mut errors = ValidationErrors::new();
        let parsed = FieldValidator::validate_datetime("2024-03-01T10:30", "pub_date", &mut errors);
        assert_eq!(parsed.unwrap().to_string(), "2024-03-01 10:30:00");

        let parsed = FieldValidator::validate_datetime("2024-03-01T10:30:15", "pub_date", &mut errors);
        assert_eq!(parsed.unwrap().to_string(), "2024-03-01 10:30:15");
        assert!(errors.is_empty());

        assert!(FieldValidator::validate_datetime("yesterday", "pub_date", &mut errors).is_none());
        assert_eq!(errors["pub_date"], vec!["Enter a valid date/time."]);
    }
}
