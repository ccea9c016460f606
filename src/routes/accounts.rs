use actix_web::{web, HttpResponse};
use handlers::Outcome;
use services::{SignInForm, SignUpForm};

use super::respond;
use crate::errors::ApiError;
use crate::state::AppState;

pub async fn sign_up(
    state: web::Data<AppState>,
    form: web::Json<SignUpForm>,
) -> Result<HttpResponse, ApiError> {
    let outcome = handlers::accounts::sign_up(&state.db, state.now(), form.into_inner()).await?;
    respond(outcome)
}

/// Returns the token in the body; a redirect would lose it.
pub async fn sign_in(
    state: web::Data<AppState>,
    form: web::Json<SignInForm>,
) -> Result<HttpResponse, ApiError> {
    match handlers::accounts::sign_in(&state.db, &state.token_config, form.into_inner()).await? {
        Outcome::Applied { value, .. } => Ok(HttpResponse::Ok().json(value)),
        other => respond(other),
    }
}
