use async_graphql::Request;
use chrono_tz::Tz;
use models::users;
use repositories::test_helpers::test_now;
use sea_orm::DatabaseConnection;
use services::{generate_token, Token, TokenConfig};

use crate::utilities::context::Now;
use crate::{build_schema, BlogSchema};

pub fn test_token_config() -> TokenConfig {
    TokenConfig {
        secret: "graphql-test-secret".to_string(),
        issuer: "localhost".to_string(),
        expiration_seconds: 3600,
    }
}

pub fn create_test_schema(db: DatabaseConnection) -> BlogSchema {
    build_schema(db, test_token_config(), Tz::UTC)
}

pub fn create_access_token(user: &users::Model) -> String {
    generate_token(user, &test_token_config()).expect("Failed to generate token")
}

/// Attaches a bearer token for `user` to the request.
pub fn authenticated(request: Request, user: &users::Model) -> Request {
    request.data(Token::new(create_access_token(user)))
}

/// Evaluates the request at the fixed test time instead of the clock.
pub fn at_test_now(request: Request) -> Request {
    request.data(Now(test_now()))
}
