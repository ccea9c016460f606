use async_graphql::{InputObject, SimpleObject};
use models::comments;
use serde::{Deserialize, Serialize};

use crate::validation::field_validators::FieldValidator;
use crate::validation::input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SimpleObject, InputObject)]
#[graphql(input_name = "CommentFormInput")]
#[serde(default)]
pub struct CommentForm {
    pub text: String,
}

impl CommentForm {
    pub fn from_model(comment: &comments::Model) -> Self {
        Self {
            text: comment.text.clone(),
        }
    }
}

impl InputValidator for CommentForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        FieldValidator::validate_required_string(&self.text, "text", &mut errors);
        errors.into_result()
    }
}
