use super::{to_result, CommentMutation, CommentMutationResult};
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Result};
use sea_orm::DatabaseConnection;
use services::CommentForm;

pub(super) async fn update_comment(
    mutation: &CommentMutation,
    ctx: &Context<'_>,
    post_id: i32,
    comment_id: i32,
    comment: CommentForm,
) -> Result<CommentMutationResult> {
    let user = mutation.current_user(ctx).await;
    let db = ctx.data::<DatabaseConnection>()?;

    let outcome =
        handlers::comments::update_comment(db, user.as_ref(), post_id, comment_id, comment).await;

    Ok(to_result(outcome, |c| CommentMutationResult::ChangedComment(c.into())))
}
