use async_graphql::{Context, Object, Result};
use sea_orm::DatabaseConnection;
use crate::errors::AuthError;
use crate::types::page::Profile;
use crate::types::user::User as UserType;
use crate::utilities::context::now;
use crate::utilities::requires_auth::RequiresAuth;
use handlers::HandlerError;

#[derive(Default)]
pub struct UserQueries;

impl RequiresAuth for UserQueries {}

#[Object]
impl UserQueries {
    /// The authenticated user
    async fn me(&self, ctx: &Context<'_>) -> Result<UserType, AuthError> {
        let user = self.require_authenticate_as_user(ctx).await?;
        Ok(user.into())
    }

    /// A user's page of posts. The owner also sees unpublished and scheduled posts.
    async fn profile(
        &self,
        ctx: &Context<'_>,
        username: String,
        page: Option<String>,
    ) -> Result<Option<Profile>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let viewer = self.current_user(ctx).await;

        match handlers::profile::profile(db, viewer.as_ref(), now(ctx), &username, page.as_deref()).await {
            Ok(p) => Ok(Some(Profile {
                user: p.profile.into(),
                page: p.page.into(),
            })),
            Err(HandlerError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
