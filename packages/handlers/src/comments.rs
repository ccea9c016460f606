use chrono::NaiveDateTime;
use models::{comments, users};
use repositories::{CommentRepository, PostRepository};
use sea_orm::DatabaseConnection;
use services::{CommentForm, InputValidator};

use crate::outcome::{ownership_redirect, Guarded, HandlerError, HandlerResult, Outcome};
use crate::urls;

/// An invalid form is dropped and the client goes back to the post.
pub async fn add_comment(
    db: &DatabaseConnection,
    user: &users::Model,
    now: NaiveDateTime,
    post_id: i32,
    form: CommentForm,
) -> HandlerResult<Outcome<comments::Model>> {
    if PostRepository::find_post(db, post_id).await?.is_none() {
        return Err(HandlerError::NotFound("post"));
    }

    if !form.is_valid() {
        return Ok(Outcome::redirect(urls::post_detail(post_id)));
    }

    let comment = CommentRepository::create(db, post_id, user.id, form.text, now).await?;
    tracing::info!(comment_id = comment.id, post_id, author_id = user.id, "comment added");

    Ok(Outcome::Applied {
        value: comment,
        location: urls::post_detail(post_id),
    })
}

pub async fn edit_comment_form(
    db: &DatabaseConnection,
    user: Option<&users::Model>,
    post_id: i32,
    comment_id: i32,
) -> HandlerResult<Guarded<CommentForm>> {
    let comment = find_comment(db, post_id, comment_id).await?;
    if let Some(location) = ownership_redirect(user, &comment) {
        return Ok(Guarded::Redirect { location });
    }
    Ok(Guarded::Allowed {
        form: CommentForm::from_model(&comment),
    })
}

pub async fn update_comment(
    db: &DatabaseConnection,
    user: Option<&users::Model>,
    post_id: i32,
    comment_id: i32,
    form: CommentForm,
) -> HandlerResult<Outcome<comments::Model>> {
    let comment = find_comment(db, post_id, comment_id).await?;
    if let Some(location) = ownership_redirect(user, &comment) {
        return Ok(Outcome::redirect(location));
    }
    if let Err(errors) = form.validate() {
        return Ok(Outcome::Invalid { errors });
    }

    let comment = CommentRepository::update_text(db, comment, form.text).await?;
    tracing::info!(comment_id = comment.id, post_id, "comment updated");

    Ok(Outcome::Applied {
        value: comment,
        location: urls::post_detail(post_id),
    })
}

pub async fn delete_comment_form(
    db: &DatabaseConnection,
    user: Option<&users::Model>,
    post_id: i32,
    comment_id: i32,
) -> HandlerResult<Guarded<comments::Model>> {
    let comment = find_comment(db, post_id, comment_id).await?;
    if let Some(location) = ownership_redirect(user, &comment) {
        return Ok(Guarded::Redirect { location });
    }
    Ok(Guarded::Allowed { form: comment })
}

pub async fn delete_comment(
    db: &DatabaseConnection,
    user: Option<&users::Model>,
    post_id: i32,
    comment_id: i32,
) -> HandlerResult<Outcome<i32>> {
    let comment = find_comment(db, post_id, comment_id).await?;
    if let Some(location) = ownership_redirect(user, &comment) {
        return Ok(Outcome::redirect(location));
    }

    let id = CommentRepository::delete(db, comment).await?;
    tracing::info!(comment_id = id, post_id, "comment deleted");

    Ok(Outcome::Applied {
        value: id,
        location: urls::post_detail(post_id),
    })
}

/// A comment addressed through a post it does not belong to is not found.
async fn find_comment(
    db: &DatabaseConnection,
    post_id: i32,
    comment_id: i32,
) -> HandlerResult<comments::Model> {
    match CommentRepository::find(db, comment_id).await? {
        Some(comment) if comment.post_id == post_id => Ok(comment),
        _ => Err(HandlerError::NotFound("comment")),
    }
}
