use crate::errors::{AuthError, DbError, Failure, NotFound, Redirect, ValidationError};
use crate::types::post::{DeletedPost, Post as PostType};
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Object, Result, Union};
use handlers::{HandlerError, Outcome};
use services::PostForm;

mod add_post;
mod delete_post;
mod update_post;

#[derive(Union)]
pub enum PostMutationResult {
    ChangedPost(PostType),
    DeletedPost(DeletedPost),
    Redirect(Redirect),
    ValidationError(ValidationError),
    NotFound(NotFound),
    DbError(DbError),
    AuthError(AuthError),
}

impl From<HandlerError> for PostMutationResult {
    fn from(e: HandlerError) -> Self {
        match Failure::from(e) {
            Failure::NotFound(e) => PostMutationResult::NotFound(e),
            Failure::Auth(e) => PostMutationResult::AuthError(e),
            Failure::Db(e) => PostMutationResult::DbError(e),
        }
    }
}

/// Shapes every non-applied outcome; `applied` builds the success member.
fn to_result<T>(
    outcome: Result<Outcome<T>, HandlerError>,
    applied: impl FnOnce(T) -> PostMutationResult,
) -> PostMutationResult {
    match outcome {
        Ok(Outcome::Applied { value, .. }) => applied(value),
        Ok(Outcome::Redirect { location }) => PostMutationResult::Redirect(Redirect { location }),
        Ok(Outcome::Invalid { errors }) => PostMutationResult::ValidationError(errors.into()),
        Err(e) => e.into(),
    }
}

#[derive(Default)]
pub struct PostMutation;

impl RequiresAuth for PostMutation {}

#[Object]
impl PostMutation {
    async fn add_post(
        &self,
        ctx: &Context<'_>,
        new_post: PostForm,
    ) -> Result<PostMutationResult> {
        add_post::add_post(self, ctx, new_post).await
    }

    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: i32,
        post: PostForm,
    ) -> Result<PostMutationResult> {
        update_post::update_post(self, ctx, id, post).await
    }

    async fn delete_post(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> Result<PostMutationResult> {
        delete_post::delete_post(self, ctx, id).await
    }
}
