use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::header,
    web, App, Error,
};
use chrono_tz::Tz;
use models::users;
use repositories::test_helpers::test_now;
use sea_orm::DatabaseConnection;
use services::{generate_token, TokenConfig};

use crate::routes;
use crate::state::{AppState, Clock};

pub fn test_token_config() -> TokenConfig {
    TokenConfig {
        secret: "http-test-secret".to_string(),
        issuer: "localhost".to_string(),
        expiration_seconds: 3600,
    }
}

pub fn test_app(
    db: DatabaseConnection,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let state = AppState::new(db, test_token_config(), Tz::UTC, Clock::Fixed(test_now()));
    App::new()
        .app_data(web::Data::new(state))
        .configure(routes::configure)
}

pub fn bearer(user: &users::Model) -> (header::HeaderName, String) {
    let token = generate_token(user, &test_token_config()).expect("Failed to generate token");
    (header::AUTHORIZATION, format!("Bearer {}", token))
}
