use super::{to_result, PostMutation, PostMutationResult};
use crate::errors::AuthError;
use crate::utilities::context::{now, time_zone};
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Result};
use sea_orm::DatabaseConnection;
use services::PostForm;

pub(super) async fn add_post(
    mutation: &PostMutation,
    ctx: &Context<'_>,
    new_post: PostForm,
) -> Result<PostMutationResult> {
    let user = match mutation.require_authenticate_as_user(ctx).await {
        Ok(user) => user,
        Err(e) => {
            return Ok(PostMutationResult::AuthError(AuthError {
                message: e.to_string(),
            }));
        }
    };

    let db = ctx.data::<DatabaseConnection>()?;
    let outcome =
        handlers::posts::create_post(db, &user, now(ctx), time_zone(ctx), new_post).await;

    Ok(to_result(outcome, |post| PostMutationResult::ChangedPost(post.into())))
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;
    use repositories::test_helpers::*;

    const ADD_POST: &str = r#"mutation {
        addPost(newPost: { title: "Test", text: "content", pubDate: "2024-06-10T09:30" }) {
            __typename
            ... on AuthError { message }
            ... on Post { id authorId isPublished pubDate }
            ... on ValidationError { errors { field messages } }
        }
    }"#;

    #[tokio::test]
    async fn test_add_post_unauthenticated_returns_auth_error() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());

        let res = schema.execute(at_test_now(Request::new(ADD_POST))).await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["addPost"]["__typename"], "AuthError");
        assert!(data["addPost"]["message"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_add_post_authenticated_creates_post() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let user = create_test_user(&db, "gql_writer").await;

        let res = schema
            .execute(authenticated(at_test_now(Request::new(ADD_POST)), &user))
            .await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
        let data = res.data.into_json().unwrap();

        assert_eq!(data["addPost"]["__typename"], "Post");
        assert_eq!(data["addPost"]["authorId"], user.id);
        assert_eq!(data["addPost"]["isPublished"], true);
        assert!(data["addPost"]["pubDate"]
            .as_str()
            .unwrap()
            .starts_with("2024-06-10T09:30"));
    }

    #[tokio::test]
    async fn test_add_post_invalid_form_returns_field_errors() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        let user = create_test_user(&db, "gql_sloppy").await;

        let query = r#"mutation {
            addPost(newPost: { title: "", text: "", pubDate: "soon" }) {
                __typename
                ... on ValidationError { errors { field } }
            }
        }"#;
        let res = schema
            .execute(authenticated(at_test_now(Request::new(query)), &user))
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["addPost"]["__typename"], "ValidationError");
        let fields: Vec<&str> = data["addPost"]["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["pub_date", "text", "title"]);
    }
}
