use crate::errors::{AuthError, DbError, Failure, NotFound, Redirect, ValidationError};
use crate::types::authorized_user::AuthorizedUser;
use crate::types::user::User;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Object, Result, Union};
use handlers::{HandlerError, Outcome};
use services::{ProfileForm, SignInForm, SignUpForm};

mod sign_in;
mod sign_up;
mod update_profile;

#[derive(Union)]
pub enum UserMutationResult {
    AuthorizedUser(AuthorizedUser),
    User(User),
    Redirect(Redirect),
    ValidationError(ValidationError),
    NotFound(NotFound),
    DbError(DbError),
    AuthError(AuthError),
}

impl From<HandlerError> for UserMutationResult {
    fn from(e: HandlerError) -> Self {
        match Failure::from(e) {
            Failure::NotFound(e) => UserMutationResult::NotFound(e),
            Failure::Auth(e) => UserMutationResult::AuthError(e),
            Failure::Db(e) => UserMutationResult::DbError(e),
        }
    }
}

fn to_result<T>(
    outcome: Result<Outcome<T>, HandlerError>,
    applied: impl FnOnce(T) -> UserMutationResult,
) -> UserMutationResult {
    match outcome {
        Ok(Outcome::Applied { value, .. }) => applied(value),
        Ok(Outcome::Redirect { location }) => UserMutationResult::Redirect(Redirect { location }),
        Ok(Outcome::Invalid { errors }) => UserMutationResult::ValidationError(errors.into()),
        Err(e) => e.into(),
    }
}

#[derive(Default)]
pub struct UserMutation;

impl RequiresAuth for UserMutation {}

#[Object]
impl UserMutation {
    async fn sign_up(&self, ctx: &Context<'_>, input: SignUpForm) -> Result<UserMutationResult> {
        sign_up::sign_up(ctx, input).await
    }

    async fn sign_in(&self, ctx: &Context<'_>, input: SignInForm) -> Result<UserMutationResult> {
        sign_in::sign_in(ctx, input).await
    }

    async fn update_profile(
        &self,
        ctx: &Context<'_>,
        input: ProfileForm,
    ) -> Result<UserMutationResult> {
        update_profile::update_profile(self, ctx, input).await
    }
}
