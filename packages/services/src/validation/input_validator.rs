use std::collections::BTreeMap;

/// Field name to messages. Ordered so rendered errors are stable.
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

/// Key for errors that belong to the form as a whole.
pub const NON_FIELD_ERRORS: &str = "__all__";

pub trait InputValidator {
    fn validate(&self) -> Result<(), ValidationErrors>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// Helper trait for combining validation errors
pub trait ValidationErrorsExt {
    fn add_error(&mut self, field: &str, message: String);
    fn merge(&mut self, other: ValidationErrors);
    fn into_result(self) -> Result<(), ValidationErrors>;
    fn to_message(&self) -> String;
}

impl ValidationErrorsExt for ValidationErrors {
    fn add_error(&mut self, field: &str, message: String) {
        self.entry(field.to_string())
            .or_default()
            .push(message);
    }

    fn merge(&mut self, other: ValidationErrors) {
        for (field, mut errors) in other {
            self.entry(field)
                .or_default()
                .append(&mut errors);
        }
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn to_message(&self) -> String {
        self.iter()
            .flat_map(|(field, messages)| messages.iter().map(move |m| format!("{}: {}", field, m)))
            .collect::<Vec<String>>()
            .join(", ")
    }
}
