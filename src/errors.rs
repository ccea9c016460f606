use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use handlers::HandlerError;
use services::{AuthenticationError, ValidationErrors};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Invalid form")]
    Invalid(ValidationErrors),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            ApiError::Invalid(errors) => {
                HttpResponse::build(status).json(serde_json::json!({ "errors": errors }))
            }
            _ => HttpResponse::build(status).json(serde_json::json!({
                "error": self.to_string(),
                "status": status.as_u16(),
            })),
        }
    }
}

impl From<HandlerError> for ApiError {
    fn from(e: HandlerError) -> Self {
        match e {
            HandlerError::NotFound(what) => ApiError::NotFound(what.to_string()),
            HandlerError::Database(db) => {
                tracing::error!(error = %db, "database error");
                ApiError::Database(db.to_string())
            }
            HandlerError::Authentication(auth) => auth.into(),
        }
    }
}

impl From<AuthenticationError> for ApiError {
    fn from(e: AuthenticationError) -> Self {
        match e {
            AuthenticationError::Db(db) => HandlerError::Database(db).into(),
            other => ApiError::Unauthorized(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::ValidationErrorsExt;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(HandlerError::NotFound("post")).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(AuthenticationError::InvalidToken("bad".into())).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(AuthenticationError::Db(sea_orm::DbErr::Custom("down".into())))
                .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let mut errors = ValidationErrors::new();
        errors.add_error("title", "This field is required.".to_string());
        assert_eq!(ApiError::Invalid(errors).status_code(), StatusCode::BAD_REQUEST);
    }
}
