use super::{to_result, UserMutation, UserMutationResult};
use crate::errors::AuthError;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Result};
use sea_orm::DatabaseConnection;
use services::ProfileForm;

pub(super) async fn update_profile(
    mutation: &UserMutation,
    ctx: &Context<'_>,
    input: ProfileForm,
) -> Result<UserMutationResult> {
    let user = match mutation.require_authenticate_as_user(ctx).await {
        Ok(user) => user,
        Err(e) => {
            return Ok(UserMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }
    };

    let db = ctx.data::<DatabaseConnection>()?;
    let outcome = handlers::profile::update_profile(db, &user, input).await;

    Ok(to_result(outcome, |user| UserMutationResult::User(user.into())))
}
