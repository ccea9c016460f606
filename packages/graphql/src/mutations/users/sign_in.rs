use super::{to_result, UserMutationResult};
use async_graphql::{Context, Result};
use sea_orm::DatabaseConnection;
use services::{SignInForm, TokenConfig};

pub(super) async fn sign_in(ctx: &Context<'_>, input: SignInForm) -> Result<UserMutationResult> {
    let db = ctx.data::<DatabaseConnection>()?;
    let config = ctx.data::<TokenConfig>()?;
    let outcome = handlers::accounts::sign_in(db, config, input).await;

    Ok(to_result(outcome, |signed_in| {
        UserMutationResult::AuthorizedUser(signed_in.into())
    }))
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;
    use repositories::test_helpers::*;

    #[tokio::test]
    async fn test_sign_in_returns_usable_token() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());

        let sign_up = r#"mutation {
            signUp(input: { username: "andrei", email: "andrei@example.com", password: "Austerlitz1805" }) {
                __typename
            }
        }"#;
        schema.execute(Request::new(sign_up)).await;

        let sign_in = r#"mutation {
            signIn(input: { username: "andrei", password: "Austerlitz1805" }) {
                __typename
                ... on AuthorizedUser { token user { username } }
            }
        }"#;
        let res = schema.execute(Request::new(sign_in)).await;
        let data = res.data.into_json().unwrap();
        assert_eq!(data["signIn"]["__typename"], "AuthorizedUser");
        assert_eq!(data["signIn"]["user"]["username"], "andrei");

        let token = data["signIn"]["token"].as_str().unwrap().to_string();
        let res = schema
            .execute(Request::new("query { me { username } }").data(services::Token::new(token)))
            .await;
        assert_eq!(res.data.into_json().unwrap()["me"]["username"], "andrei");
    }

    #[tokio::test]
    async fn test_sign_in_bad_password() {
        let db = setup_test_db().await;
        let schema = create_test_schema(db.clone());
        create_test_user(&db, "dolokhov").await;

        let query = r#"mutation {
            signIn(input: { username: "dolokhov", password: "whatever1" }) {
                __typename
                ... on ValidationError { errors { field } }
            }
        }"#;
        let res = schema.execute(Request::new(query)).await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["signIn"]["__typename"], "ValidationError");
        assert_eq!(data["signIn"]["errors"][0]["field"], "__all__");
    }
}
