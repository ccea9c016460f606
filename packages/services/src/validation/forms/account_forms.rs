use async_graphql::InputObject;
use serde::Deserialize;

use crate::validation::field_validators::FieldValidator;
use crate::validation::input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};

#[derive(Debug, Clone, Default, Deserialize, InputObject)]
#[serde(default)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl InputValidator for SignUpForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_username(&self.username, &mut errors);
        FieldValidator::validate_optional_email(&self.email, &mut errors);
        FieldValidator::validate_password_field(&self.password, &self.username, "password", &mut errors);

        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize, InputObject)]
#[serde(default)]
pub struct SignInForm {
    pub username: String,
    pub password: String,
}

impl InputValidator for SignInForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(&self.username, "username", &mut errors);
        FieldValidator::validate_required_string(&self.password, "password", &mut errors);

        errors.into_result()
    }
}
