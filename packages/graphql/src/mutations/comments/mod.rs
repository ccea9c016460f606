use crate::errors::{AuthError, DbError, Failure, NotFound, Redirect, ValidationError};
use crate::types::comment::{Comment as CommentType, DeletedComment};
use crate::utilities::requires_auth::RequiresAuth;
use async_graphql::{Context, Object, Result, Union};
use handlers::{HandlerError, Outcome};
use services::CommentForm;

mod add_comment;
mod delete_comment;
mod update_comment;

#[derive(Union)]
pub enum CommentMutationResult {
    ChangedComment(CommentType),
    DeletedComment(DeletedComment),
    Redirect(Redirect),
    ValidationError(ValidationError),
    NotFound(NotFound),
    DbError(DbError),
    AuthError(AuthError),
}

impl From<HandlerError> for CommentMutationResult {
    fn from(e: HandlerError) -> Self {
        match Failure::from(e) {
            Failure::NotFound(e) => CommentMutationResult::NotFound(e),
            Failure::Auth(e) => CommentMutationResult::AuthError(e),
            Failure::Db(e) => CommentMutationResult::DbError(e),
        }
    }
}

fn to_result<T>(
    outcome: Result<Outcome<T>, HandlerError>,
    applied: impl FnOnce(T) -> CommentMutationResult,
) -> CommentMutationResult {
    match outcome {
        Ok(Outcome::Applied { value, .. }) => applied(value),
        Ok(Outcome::Redirect { location }) => CommentMutationResult::Redirect(Redirect { location }),
        Ok(Outcome::Invalid { errors }) => CommentMutationResult::ValidationError(errors.into()),
        Err(e) => e.into(),
    }
}

#[derive(Default)]
pub struct CommentMutation;

impl RequiresAuth for CommentMutation {}

#[Object]
impl CommentMutation {
    async fn add_comment(
        &self,
        ctx: &Context<'_>,
        post_id: i32,
        comment: CommentForm,
    ) -> Result<CommentMutationResult> {
        add_comment::add_comment(self, ctx, post_id, comment).await
    }

    async fn update_comment(
        &self,
        ctx: &Context<'_>,
        post_id: i32,
        comment_id: i32,
        comment: CommentForm,
    ) -> Result<CommentMutationResult> {
        update_comment::update_comment(self, ctx, post_id, comment_id, comment).await
    }

    async fn delete_comment(
        &self,
        ctx: &Context<'_>,
        post_id: i32,
        comment_id: i32,
    ) -> Result<CommentMutationResult> {
        delete_comment::delete_comment(self, ctx, post_id, comment_id).await
    }
}
