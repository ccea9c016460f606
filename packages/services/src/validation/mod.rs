pub mod field_validators;
pub mod forms;
pub mod input_validator;
pub mod password;

// Re-export common types and functions
pub use field_validators::FieldValidator;
pub use forms::{CleanedPost, CommentForm, PostForm, ProfileForm, SignInForm, SignUpForm};
pub use input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt, NON_FIELD_ERRORS};
pub use password::validate_password;
