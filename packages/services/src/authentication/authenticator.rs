use models::prelude::Users;
use models::users::Model;
use sea_orm::*;
use thiserror::Error;

use super::token::{Token, TokenConfig};

#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("{0}")]
    BadCredentials(String),
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}

/// Resolves the user a bearer token was issued to.
pub async fn get_user(
    db: &DatabaseConnection,
    token: &Token,
    config: &TokenConfig,
) -> Result<Model, AuthenticationError> {
    let user_id = token.get_user_id(config)?;

    Users::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| AuthenticationError::BadCredentials("User not found".to_string()))
}
