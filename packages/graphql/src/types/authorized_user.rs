use async_graphql::SimpleObject;

use super::user::User;

#[derive(SimpleObject)]
pub struct AuthorizedUser {
    pub token: String,
    pub user: User,
}

impl From<handlers::accounts::SignedIn> for AuthorizedUser {
    fn from(s: handlers::accounts::SignedIn) -> Self {
        AuthorizedUser {
            token: s.token,
            user: s.user.into(),
        }
    }
}
