use super::{to_result, CommentMutation, CommentMutationResult};
use crate::errors::AuthError;
use crate::utilities::context::now;
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Result};
use sea_orm::DatabaseConnection;
use services::CommentForm;

pub(super) async fn add_comment(
    mutation: &CommentMutation,
    ctx: &Context<'_>,
    post_id: i32,
    comment: CommentForm,
) -> Result<CommentMutationResult> {
    let user = match mutation.require_authenticate_as_user(ctx).await {
        Ok(user) => user,
        Err(e) => {
            return Ok(CommentMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }
    };

    let db = ctx.data::<DatabaseConnection>()?;
    let outcome = handlers::comments::add_comment(db, &user, now(ctx), post_id, comment).await;

    Ok(to_result(outcome, |c| CommentMutationResult::ChangedComment(c.into())))
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;
    use repositories::test_helpers::*;

    fn query(post_id: i32, text: &str) -> String {
        format!(
            r#"mutation {{
                addComment(postId: {}, comment: {{ text: "{}" }}) {{
                    __typename
                    ... on Comment {{ postId authorId text }}
                    ... on Redirect {{ location }}
                }}
            }}"#,
            post_id, text
        )
    }

    #[tokio::test]
    async fn test_add_comment() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let author = create_test_user(&db, "gql_c_author").await;
        let reader = create_test_user(&db, "gql_c_reader").await;
        let post = create_test_post(&db, author.id, None, "Post", true, days_ago(1)).await;

        let res = schema
            .execute(authenticated(at_test_now(Request::new(query(post.id, "Nice"))), &reader))
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["addComment"]["__typename"], "Comment");
        assert_eq!(data["addComment"]["authorId"], reader.id);
        assert_eq!(data["addComment"]["postId"], post.id);
    }

    #[tokio::test]
    async fn test_add_blank_comment_redirects() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let author = create_test_user(&db, "gql_c_blank").await;
        let post = create_test_post(&db, author.id, None, "Post", true, days_ago(1)).await;

        let res = schema
            .execute(authenticated(Request::new(query(post.id, " ")), &author))
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["addComment"]["__typename"], "Redirect");
    }

    #[tokio::test]
    async fn test_add_comment_unauthenticated() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let author = create_test_user(&db, "gql_c_anon").await;
        let post = create_test_post(&db, author.id, None, "Post", true, days_ago(1)).await;

        let res = schema.execute(Request::new(query(post.id, "hi"))).await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["addComment"]["__typename"], "AuthError");
    }
}
