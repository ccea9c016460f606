use actix_web::{web, HttpResponse};
use services::ProfileForm;

use super::{respond, PageQuery};
use crate::errors::ApiError;
use crate::extractors::{CurrentUser, MaybeUser};
use crate::state::AppState;

pub async fn profile(
    state: web::Data<AppState>,
    user: MaybeUser,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let page = handlers::profile::profile(
        &state.db,
        user.user(),
        state.now(),
        &path,
        query.page.as_deref(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(page))
}

pub async fn edit_profile_form(user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(handlers::profile::edit_profile_form(&user.0))
}

pub async fn update_profile(
    state: web::Data<AppState>,
    user: CurrentUser,
    form: web::Json<ProfileForm>,
) -> Result<HttpResponse, ApiError> {
    let outcome = handlers::profile::update_profile(&state.db, &user.0, form.into_inner()).await?;
    respond(outcome)
}
