use actix_web::{web, HttpResponse};
use services::CommentForm;

use super::{guarded, respond};
use crate::errors::ApiError;
use crate::extractors::{CurrentUser, MaybeUser};
use crate::state::AppState;

pub async fn add_comment(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<i32>,
    form: web::Json<CommentForm>,
) -> Result<HttpResponse, ApiError> {
    let outcome = handlers::comments::add_comment(
        &state.db,
        &user.0,
        state.now(),
        path.into_inner(),
        form.into_inner(),
    )
    .await?;
    respond(outcome)
}

pub async fn edit_comment_form(
    state: web::Data<AppState>,
    user: MaybeUser,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse, ApiError> {
    let (post_id, comment_id) = path.into_inner();
    let form =
        handlers::comments::edit_comment_form(&state.db, user.user(), post_id, comment_id).await?;
    Ok(guarded(form))
}

pub async fn update_comment(
    state: web::Data<AppState>,
    user: MaybeUser,
    path: web::Path<(i32, i32)>,
    form: web::Json<CommentForm>,
) -> Result<HttpResponse, ApiError> {
    let (post_id, comment_id) = path.into_inner();
    let outcome = handlers::comments::update_comment(
        &state.db,
        user.user(),
        post_id,
        comment_id,
        form.into_inner(),
    )
    .await?;
    respond(outcome)
}

pub async fn delete_comment_form(
    state: web::Data<AppState>,
    user: MaybeUser,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse, ApiError> {
    let (post_id, comment_id) = path.into_inner();
    let comment =
        handlers::comments::delete_comment_form(&state.db, user.user(), post_id, comment_id)
            .await?;
    Ok(guarded(comment))
}

pub async fn delete_comment(
    state: web::Data<AppState>,
    user: MaybeUser,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse, ApiError> {
    let (post_id, comment_id) = path.into_inner();
    let outcome =
        handlers::comments::delete_comment(&state.db, user.user(), post_id, comment_id).await?;
    respond(outcome)
}
