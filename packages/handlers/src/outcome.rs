use models::users;
use sea_orm::DbErr;
use serde::Serialize;
use services::{can_mutate, AuthenticationError, Authored, ValidationErrors};
use thiserror::Error;

use crate::urls;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    #[error("{0}")]
    Authentication(#[from] AuthenticationError),
}

pub type HandlerResult<T> = Result<T, HandlerError>;

/// Result of a form submission.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome<T> {
    /// Persisted; the client continues at `location`.
    Applied { value: T, location: String },
    /// Nothing was persisted.
    Redirect { location: String },
    /// Nothing was persisted; the form is shown again with these errors.
    Invalid { errors: ValidationErrors },
}

impl<T> Outcome<T> {
    pub fn redirect(location: impl Into<String>) -> Self {
        Outcome::Redirect {
            location: location.into(),
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Outcome::Applied { location, .. } | Outcome::Redirect { location } => Some(location),
            Outcome::Invalid { .. } => None,
        }
    }
}

/// Result of opening a form page that only the author may see.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Guarded<T> {
    Allowed { form: T },
    Redirect { location: String },
}

/// `None` when `user` may change `object`, otherwise where to send them.
pub(crate) fn ownership_redirect<T: Authored>(
    user: Option<&users::Model>,
    object: &T,
) -> Option<String> {
    if can_mutate(user, object) {
        return None;
    }
    tracing::warn!(
        user_id = user.map(|u| u.id),
        author_id = object.author_id(),
        post_id = object.owning_post_id(),
        "rejected change by non-author"
    );
    Some(urls::post_detail(object.owning_post_id()))
}
