use async_graphql::SimpleObject;
use handlers::HandlerError;
use services::{ValidationErrors, ValidationErrorsExt};
use std::fmt;

#[derive(SimpleObject, Debug)]
pub struct DbError {
    pub message: String,
}

impl From<sea_orm::error::DbErr> for DbError {
    fn from(e: sea_orm::error::DbErr) -> Self {
        DbError { message: e.to_string() }
    }
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

#[derive(SimpleObject, Debug)]
pub struct AuthError {
    pub message: String,
}

impl From<services::AuthenticationError> for AuthError {
    fn from(e: services::AuthenticationError) -> Self {
        AuthError { message: e.to_string() }
    }
}

impl From<crate::utilities::requires_auth::AuthenticationError> for AuthError {
    fn from(e: crate::utilities::requires_auth::AuthenticationError) -> Self {
        AuthError { message: e.to_string() }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

#[derive(SimpleObject, Debug)]
pub struct NotFound {
    pub message: String,
}

/// Client should continue at `location`; nothing was changed.
#[derive(SimpleObject, Debug)]
pub struct Redirect {
    pub location: String,
}

#[derive(SimpleObject, Debug)]
pub struct FieldErrors {
    pub field: String,
    pub messages: Vec<String>,
}

#[derive(SimpleObject, Debug)]
pub struct ValidationError {
    pub message: String,
    pub errors: Vec<FieldErrors>,
}

impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        ValidationError {
            message: errors.to_message(),
            errors: errors
                .into_iter()
                .map(|(field, messages)| FieldErrors { field, messages })
                .collect(),
        }
    }
}

/// Error half of a mutation result, before it is placed in a union.
pub enum Failure {
    NotFound(NotFound),
    Auth(AuthError),
    Db(DbError),
}

impl From<HandlerError> for Failure {
    fn from(e: HandlerError) -> Self {
        match e {
            HandlerError::NotFound(what) => Failure::NotFound(NotFound {
                message: format!("{} not found", what),
            }),
            HandlerError::Database(db) => {
                tracing::error!(error = %db, "database error");
                Failure::Db(db.into())
            }
            HandlerError::Authentication(auth) => Failure::Auth(auth.into()),
        }
    }
}
