use std::fmt;

pub const MIN_PASSWORD_LENGTH: usize = 8;

const COMMON_PASSWORDS: [&str; 12] = [
    "password",
    "password1",
    "12345678",
    "123456789",
    "1234567890",
    "qwerty123",
    "qwertyuiop",
    "iloveyou",
    "11111111",
    "abc12345",
    "letmein1",
    "sunshine",
];

/// Reasons a password is rejected at registration.
#[derive(Debug, PartialEq, Eq)]
pub enum PasswordValidationError {
    TooSimilar,
    TooShort,
    CommonPassword,
    EntirelyNumeric,
}

impl fmt::Display for PasswordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordValidationError::TooSimilar =>
                write!(f, "The password is too similar to the username."),
            PasswordValidationError::TooShort =>
                write!(f, "This password is too short. It must contain at least {} characters.", MIN_PASSWORD_LENGTH),
            PasswordValidationError::CommonPassword =>
                write!(f, "This password is too common."),
            PasswordValidationError::EntirelyNumeric =>
                write!(f, "This password is entirely numeric."),
        }
    }
}

/// Checks a new password, reporting every rule it breaks.
pub fn validate_password(password: &str, username: &str) -> Result<(), Vec<PasswordValidationError>> {
    let mut problems = Vec::new();
    let lowered = password.to_lowercase();
    let username = username.trim().to_lowercase();

    if username.chars().count() >= 3 && (lowered.contains(&username) || username.contains(&lowered)) {
        problems.push(PasswordValidationError::TooSimilar);
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        problems.push(PasswordValidationError::TooShort);
    }

    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        problems.push(PasswordValidationError::CommonPassword);
    }

    if password.chars().all(|c| c.is_ascii_digit()) {
        problems.push(PasswordValidationError::EntirelyNumeric);
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}
