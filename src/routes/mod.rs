use actix_web::{http::header, web, HttpResponse};
use handlers::{Guarded, Outcome};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

mod accounts;
mod comments;
mod graphql_endpoint;
mod posts;
mod profile;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::index))
        .service(
            web::resource("/posts/create/")
                .route(web::get().to(posts::new_post_form))
                .route(web::post().to(posts::create_post)),
        )
        .route("/posts/{id}/", web::get().to(posts::post_detail))
        .service(
            web::resource("/posts/{id}/edit/")
                .route(web::get().to(posts::edit_post_form))
                .route(web::post().to(posts::update_post)),
        )
        .service(
            web::resource("/posts/{id}/delete/")
                .route(web::get().to(posts::delete_post_form))
                .route(web::post().to(posts::delete_post)),
        )
        .route("/posts/{id}/comment/", web::post().to(comments::add_comment))
        .service(
            web::resource("/posts/{id}/edit_comment/{comment_id}")
                .route(web::get().to(comments::edit_comment_form))
                .route(web::post().to(comments::update_comment)),
        )
        .service(
            web::resource("/posts/{id}/delete_comment/{comment_id}")
                .route(web::get().to(comments::delete_comment_form))
                .route(web::post().to(comments::delete_comment)),
        )
        .route("/category/{slug}/", web::get().to(posts::category_posts))
        .route("/profile/{username}/", web::get().to(profile::profile))
        .service(
            web::resource("/profile_edit/")
                .route(web::get().to(profile::edit_profile_form))
                .route(web::post().to(profile::update_profile)),
        )
        .route("/auth/sign_up/", web::post().to(accounts::sign_up))
        .route("/auth/sign_in/", web::post().to(accounts::sign_in))
        .service(
            web::resource("/graphql")
                .route(web::get().to(graphql_endpoint::graphiql))
                .route(web::post().to(graphql_endpoint::graphql_request)),
        );
}

fn found(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// 302 to the outcome's location, or 400 with the field errors.
fn respond<T>(outcome: Outcome<T>) -> Result<HttpResponse, ApiError> {
    match outcome {
        Outcome::Applied { location, .. } | Outcome::Redirect { location } => Ok(found(&location)),
        Outcome::Invalid { errors } => Err(ApiError::Invalid(errors)),
    }
}

fn guarded<T: Serialize>(guarded: Guarded<T>) -> HttpResponse {
    match guarded {
        Guarded::Allowed { form } => HttpResponse::Ok().json(form),
        Guarded::Redirect { location } => found(&location),
    }
}
