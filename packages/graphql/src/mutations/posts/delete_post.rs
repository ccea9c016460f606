use super::{to_result, PostMutation, PostMutationResult};
use crate::types::post::DeletedPost;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Result};
use sea_orm::DatabaseConnection;

pub(super) async fn delete_post(
    mutation: &PostMutation,
    ctx: &Context<'_>,
    id: i32,
) -> Result<PostMutationResult> {
    let user = mutation.current_user(ctx).await;
    let db = ctx.data::<DatabaseConnection>()?;

    let outcome = handlers::posts::delete_post(db, user.as_ref(), id).await;

    Ok(to_result(outcome, |id| PostMutationResult::DeletedPost(DeletedPost { id })))
}
