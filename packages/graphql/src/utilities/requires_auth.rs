use std::fmt;
use services::{get_user, Token, TokenConfig};
use async_graphql::Context;
use sea_orm::DatabaseConnection;

pub struct AuthenticationError {
    pub message: String,
}

impl From<services::AuthenticationError> for AuthenticationError {
    fn from(e: services::AuthenticationError) -> Self {
        AuthenticationError { message: e.to_string() }
    }
}
impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

fn missing(what: &str) -> AuthenticationError {
    AuthenticationError {
        message: format!("{} not found", what),
    }
}

pub trait RequiresAuth {
    async fn require_authenticate_as_user<'a>(&self, ctx: &Context<'a>) -> Result<models::users::Model, AuthenticationError> {
        let token = ctx.data::<Token>().map_err(|_| missing("Token"))?;
        let db = ctx.data::<DatabaseConnection>().map_err(|_| missing("Database connection"))?;
        let config = ctx.data::<TokenConfig>().map_err(|_| missing("Token configuration"))?;

        let user = get_user(db, token, config).await?;
        Ok(user)
    }

    /// Acting user for public resolvers: a missing or bad token is anonymous.
    async fn current_user<'a>(&self, ctx: &Context<'a>) -> Option<models::users::Model> {
        match self.require_authenticate_as_user(ctx).await {
            Ok(user) => Some(user),
            Err(e) => {
                if ctx.data_opt::<Token>().is_some() {
                    tracing::warn!(error = %e, "ignoring invalid bearer token");
                }
                None
            }
        }
    }
}
