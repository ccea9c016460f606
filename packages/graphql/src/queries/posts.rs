use async_graphql::{Context, Object, Result};
use sea_orm::DatabaseConnection;
use services::PostForm;
use crate::errors::AuthError;
use crate::types::page::{CategoryPosts, PostPage};
use crate::types::post::PostDetail;
use crate::utilities::context::{now, time_zone};
use crate::utilities::requires_auth::RequiresAuth;
use handlers::HandlerError;

#[derive(Default)]
pub struct PostQueries;

impl RequiresAuth for PostQueries {}

#[Object]
impl PostQueries {
    /// Published posts, newest first, ten per page
    async fn index(&self, ctx: &Context<'_>, page: Option<String>) -> Result<PostPage> {
        let db = ctx.data::<DatabaseConnection>()?;
        let page = handlers::posts::index(db, now(ctx), page.as_deref()).await?;
        Ok(page.into())
    }

    /// A single post with its comments, or null when the viewer may not see it
    async fn post(&self, ctx: &Context<'_>, id: i32) -> Result<Option<PostDetail>> {
        let db = ctx.data::<DatabaseConnection>()?;
        let viewer = self.current_user(ctx).await;

        match handlers::posts::post_detail(db, viewer.as_ref(), now(ctx), id).await {
            Ok(detail) => Ok(Some(detail.into())),
            Err(HandlerError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn category_posts(
        &self,
        ctx: &Context<'_>,
        slug: String,
        page: Option<String>,
    ) -> Result<Option<CategoryPosts>> {
        let db = ctx.data::<DatabaseConnection>()?;

        match handlers::posts::category_posts(db, now(ctx), &slug, page.as_deref()).await {
            Ok(listing) => Ok(Some(CategoryPosts {
                category: listing.category.into(),
                page: listing.page.into(),
            })),
            Err(HandlerError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Blank post form with the publication date set to now
    async fn new_post_form(&self, ctx: &Context<'_>) -> Result<PostForm, AuthError> {
        self.require_authenticate_as_user(ctx).await?;
        Ok(handlers::posts::new_post_form(now(ctx), time_zone(ctx)))
    }
}
