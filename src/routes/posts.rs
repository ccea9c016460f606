use actix_web::{web, HttpResponse};
use services::PostForm;

use super::{guarded, respond, PageQuery};
use crate::errors::ApiError;
use crate::extractors::{CurrentUser, MaybeUser};
use crate::state::AppState;

pub async fn index(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = handlers::posts::index(&state.db, state.now(), query.page.as_deref()).await?;
    Ok(HttpResponse::Ok().json(page))
}

pub async fn post_detail(
    state: web::Data<AppState>,
    user: MaybeUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let detail =
        handlers::posts::post_detail(&state.db, user.user(), state.now(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(detail))
}

pub async fn category_posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let listing =
        handlers::posts::category_posts(&state.db, state.now(), &path, query.page.as_deref())
            .await?;
    Ok(HttpResponse::Ok().json(listing))
}

pub async fn new_post_form(state: web::Data<AppState>, _user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(handlers::posts::new_post_form(state.now(), state.time_zone))
}

pub async fn create_post(
    state: web::Data<AppState>,
    user: CurrentUser,
    form: web::Json<PostForm>,
) -> Result<HttpResponse, ApiError> {
    let outcome = handlers::posts::create_post(
        &state.db,
        &user.0,
        state.now(),
        state.time_zone,
        form.into_inner(),
    )
    .await?;
    respond(outcome)
}

pub async fn edit_post_form(
    state: web::Data<AppState>,
    user: MaybeUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let form =
        handlers::posts::edit_post_form(&state.db, user.user(), state.time_zone, path.into_inner())
            .await?;
    Ok(guarded(form))
}

pub async fn update_post(
    state: web::Data<AppState>,
    user: MaybeUser,
    path: web::Path<i32>,
    form: web::Json<PostForm>,
) -> Result<HttpResponse, ApiError> {
    let outcome = handlers::posts::update_post(
        &state.db,
        user.user(),
        state.time_zone,
        path.into_inner(),
        form.into_inner(),
    )
    .await?;
    respond(outcome)
}

pub async fn delete_post_form(
    state: web::Data<AppState>,
    user: MaybeUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let form = handlers::posts::delete_post_form(
        &state.db,
        user.user(),
        state.time_zone,
        path.into_inner(),
    )
    .await?;
    Ok(guarded(form))
}

pub async fn delete_post(
    state: web::Data<AppState>,
    user: MaybeUser,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let outcome = handlers::posts::delete_post(&state.db, user.user(), path.into_inner()).await?;
    respond(outcome)
}
