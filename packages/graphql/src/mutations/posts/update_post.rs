use super::{to_result, PostMutation, PostMutationResult};
use crate::utilities::context::time_zone;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Result};
use sea_orm::DatabaseConnection;
use services::PostForm;

pub(super) async fn update_post(
    mutation: &PostMutation,
    ctx: &Context<'_>,
    id: i32,
    post: PostForm,
) -> Result<PostMutationResult> {
    let user = mutation.current_user(ctx).await;
    let db = ctx.data::<DatabaseConnection>()?;

    let outcome = handlers::posts::update_post(db, user.as_ref(), time_zone(ctx), id, post).await;

    Ok(to_result(outcome, |post| PostMutationResult::ChangedPost(post.into())))
}
