use super::{to_result, CommentMutation, CommentMutationResult};
use crate::types::comment::DeletedComment;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Result};
use sea_orm::DatabaseConnection;

pub(super) async fn delete_comment(
    mutation: &CommentMutation,
    ctx: &Context<'_>,
    post_id: i32,
    comment_id: i32,
) -> Result<CommentMutationResult> {
    let user = mutation.current_user(ctx).await;
    let db = ctx.data::<DatabaseConnection>()?;

    let outcome = handlers::comments::delete_comment(db, user.as_ref(), post_id, comment_id).await;

    Ok(to_result(outcome, |id| {
        CommentMutationResult::DeletedComment(DeletedComment { id })
    }))
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;
    use repositories::test_helpers::*;

    #[tokio::test]
    async fn test_delete_comment_through_wrong_post_is_not_found() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let author = create_test_user(&db, "gql_cd_author").await;
        let post = create_test_post(&db, author.id, None, "Post", true, days_ago(1)).await;
        let other = create_test_post(&db, author.id, None, "Other", true, days_ago(1)).await;
        let comment = create_test_comment(&db, post.id, author.id, "here").await;

        let query = |post_id: i32| {
            format!(
                r#"mutation {{
                    deleteComment(postId: {}, commentId: {}) {{
                        __typename
                        ... on DeletedComment {{ id }}
                    }}
                }}"#,
                post_id, comment.id
            )
        };

        let res = schema
            .execute(authenticated(Request::new(query(other.id)), &author))
            .await;
        assert_eq!(res.data.into_json().unwrap()["deleteComment"]["__typename"], "NotFound");

        let res = schema
            .execute(authenticated(Request::new(query(post.id)), &author))
            .await;
        let data = res.data.into_json().unwrap();
        assert_eq!(data["deleteComment"]["__typename"], "DeletedComment");
        assert_eq!(data["deleteComment"]["id"], comment.id);
    }
}
