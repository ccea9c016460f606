use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use models::users;
use services::{get_user, Token};

use crate::errors::ApiError;
use crate::state::AppState;

/// Authenticated user. Requests without a valid bearer token get 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub users::Model);

/// Acting user on public routes. A missing or invalid token is anonymous.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<users::Model>);

impl MaybeUser {
    pub fn user(&self) -> Option<&users::Model> {
        self.0.as_ref()
    }
}

pub fn bearer_token(req: &HttpRequest) -> Option<Token> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(Token::from_authorization_header)
}

async fn authenticate(
    state: Option<web::Data<AppState>>,
    token: Option<Token>,
) -> Result<users::Model, ApiError> {
    let state = state.ok_or_else(|| ApiError::Internal("application state missing".to_string()))?;
    let token = token.ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

    get_user(&state.db, &token, &state.token_config)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "rejected bearer token");
            e.into()
        })
}

impl FromRequest for CurrentUser {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = bearer_token(req);

        Box::pin(async move { authenticate(state, token).await.map(CurrentUser) })
    }
}

impl FromRequest for MaybeUser {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = bearer_token(req);

        Box::pin(async move {
            if token.is_none() {
                return Ok(MaybeUser(None));
            }
            match authenticate(state, token).await {
                Ok(user) => Ok(MaybeUser(Some(user))),
                Err(ApiError::Unauthorized(_)) => Ok(MaybeUser(None)),
                Err(e) => Err(e),
            }
        })
    }
}
