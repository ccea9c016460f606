use async_graphql::{InputObject, SimpleObject};
use models::users;
use serde::{Deserialize, Serialize};

use crate::validation::field_validators::FieldValidator;
use crate::validation::input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SimpleObject, InputObject)]
#[graphql(input_name = "ProfileFormInput")]
#[serde(default)]
pub struct ProfileForm {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ProfileForm {
    pub fn from_user(user: &users::Model) -> Self {
        Self {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

impl InputValidator for ProfileForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_username(&self.username, &mut errors);
        FieldValidator::validate_max_length(&self.first_name, 150, "first_name", &mut errors);
        FieldValidator::validate_max_length(&self.last_name, 150, "last_name", &mut errors);
        FieldValidator::validate_optional_email(&self.email, &mut errors);

        errors.into_result()
    }
}
