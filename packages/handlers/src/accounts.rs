use chrono::NaiveDateTime;
use models::users;
use repositories::UserRepository;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use services::{
    generate_token, hash_password, verify_password, InputValidator, SignInForm, SignUpForm,
    TokenConfig, ValidationErrors, ValidationErrorsExt, NON_FIELD_ERRORS,
};

use crate::outcome::{HandlerResult, Outcome};
use crate::profile::{username_conflict, USERNAME_TAKEN};
use crate::urls;

const BAD_CREDENTIALS: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";

#[derive(Debug, Serialize)]
pub struct SignedIn {
    pub token: String,
    pub user: users::Model,
}

pub async fn sign_up(
    db: &DatabaseConnection,
    now: NaiveDateTime,
    form: SignUpForm,
) -> HandlerResult<Outcome<users::Model>> {
    let mut errors = match form.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };
    let username = form.username.trim().to_string();

    if UserRepository::find_by_username(db, &username).await?.is_some() {
        errors.add_error("username", USERNAME_TAKEN.to_string());
    }
    if let Err(errors) = errors.into_result() {
        return Ok(Outcome::Invalid { errors });
    }

    let password_hash = hash_password(&form.password)?;
    let created = UserRepository::create(
        db,
        username,
        form.email.trim().to_string(),
        password_hash,
        now,
    )
    .await;
    let user = match username_conflict(created)? {
        Ok(user) => user,
        Err(errors) => return Ok(Outcome::Invalid { errors }),
    };
    tracing::info!(user_id = user.id, "user registered");

    Ok(Outcome::Applied {
        location: urls::profile(&user.username),
        value: user,
    })
}

/// Checks the password and issues a bearer token.
pub async fn sign_in(
    db: &DatabaseConnection,
    config: &TokenConfig,
    form: SignInForm,
) -> HandlerResult<Outcome<SignedIn>> {
    if let Err(errors) = form.validate() {
        return Ok(Outcome::Invalid { errors });
    }

    let user = match UserRepository::find_by_username(db, form.username.trim()).await? {
        Some(user) if verify_password(&form.password, &user.password) => user,
        _ => {
            tracing::warn!(username = %form.username.trim(), "failed sign in");
            let mut errors = ValidationErrors::new();
            errors.add_error(NON_FIELD_ERRORS, BAD_CREDENTIALS.to_string());
            return Ok(Outcome::Invalid { errors });
        }
    };

    let token = generate_token(&user, config)?;
    tracing::info!(user_id = user.id, "user signed in");

    Ok(Outcome::Applied {
        location: urls::profile(&user.username),
        value: SignedIn { token, user },
    })
}
