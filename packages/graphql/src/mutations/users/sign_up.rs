use super::{to_result, UserMutationResult};
use crate::utilities::context::now;
use async_graphql::{Context, Result};
use sea_orm::DatabaseConnection;
use services::SignUpForm;

pub(super) async fn sign_up(ctx: &Context<'_>, input: SignUpForm) -> Result<UserMutationResult> {
    let db = ctx.data::<DatabaseConnection>()?;
    let outcome = handlers::accounts::sign_up(db, now(ctx), input).await;

    Ok(to_result(outcome, |user| UserMutationResult::User(user.into())))
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;
    use repositories::test_helpers::*;

    #[tokio::test]
    async fn test_sign_up_creates_user() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db);

        let query = r#"mutation {
            signUp(input: { username: "natasha", email: "natasha@example.com", password: "Bezukhov1812!" }) {
                __typename
                ... on User { username email }
            }
        }"#;
        let res = schema.execute(at_test_now(Request::new(query))).await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
        let data = res.data.into_json().unwrap();

        assert_eq!(data["signUp"]["__typename"], "User");
        assert_eq!(data["signUp"]["username"], "natasha");
    }

    #[tokio::test]
    async fn test_sign_up_weak_password() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db);

        let query = r#"mutation {
            signUp(input: { username: "pierre", email: "", password: "123" }) {
                __typename
                ... on ValidationError { message errors { field messages } }
            }
        }"#;
        let res = schema.execute(Request::new(query)).await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["signUp"]["__typename"], "ValidationError");
        assert_eq!(data["signUp"]["errors"][0]["field"], "password");
    }
}
