use chrono::NaiveDateTime;
use models::users;
use repositories::{AnnotatedPost, ListingFilter, PostRepository, UserRepository};
use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use serde::Serialize;
use services::{
    InputValidator, Page, ProfileForm, ValidationErrors, ValidationErrorsExt, VisibilityFilter,
};

use crate::outcome::{HandlerError, HandlerResult, Outcome};
use crate::urls;

pub(crate) const USERNAME_TAKEN: &str = "A user with that username already exists.";

#[derive(Debug, Serialize)]
pub struct ProfilePage {
    pub profile: users::Model,
    pub page: Page<AnnotatedPost>,
}

/// The owner sees every post they wrote; other viewers see the visible ones.
pub async fn profile(
    db: &DatabaseConnection,
    viewer: Option<&users::Model>,
    now: NaiveDateTime,
    username: &str,
    page: Option<&str>,
) -> HandlerResult<ProfilePage> {
    let profile = UserRepository::find_by_username(db, username)
        .await?
        .ok_or(HandlerError::NotFound("user"))?;

    let is_owner = viewer.map(|v| v.id == profile.id).unwrap_or(false);
    let filter = ListingFilter::ByAuthor {
        author_id: profile.id,
        visibility: (!is_owner).then(|| VisibilityFilter::new(now)),
    };

    let page = PostRepository::list_posts(db, &filter, page).await?;
    Ok(ProfilePage { profile, page })
}

pub fn edit_profile_form(user: &users::Model) -> ProfileForm {
    ProfileForm::from_user(user)
}

pub async fn update_profile(
    db: &DatabaseConnection,
    user: &users::Model,
    form: ProfileForm,
) -> HandlerResult<Outcome<users::Model>> {
    let mut errors = match form.validate() {
        Ok(()) => Default::default(),
        Err(errors) => errors,
    };

    if let Some(existing) = UserRepository::find_by_username(db, form.username.trim()).await? {
        if existing.id != user.id {
            errors.add_error("username", USERNAME_TAKEN.to_string());
        }
    }
    if let Err(errors) = errors.into_result() {
        return Ok(Outcome::Invalid { errors });
    }

    let written = UserRepository::update_profile(db, user.clone(), form).await;
    let updated = match username_conflict(written)? {
        Ok(updated) => updated,
        Err(errors) => return Ok(Outcome::Invalid { errors }),
    };
    tracing::info!(user_id = updated.id, "profile updated");

    Ok(Outcome::Applied {
        location: urls::profile(&updated.username),
        value: updated,
    })
}

/// Turns a unique violation from a write racing another claim of the same
/// username into the same field error the up-front check gives.
pub(crate) fn username_conflict<T>(
    result: Result<T, DbErr>,
) -> HandlerResult<Result<T, ValidationErrors>> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            tracing::warn!(error = %e, "username claimed by a concurrent request");
            let mut errors = ValidationErrors::new();
            errors.add_error("username", USERNAME_TAKEN.to_string());
            Ok(Err(errors))
        }
        Err(e) => Err(e.into()),
    }
}
