use async_graphql::{InputObject, SimpleObject};
use chrono::{NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use models::posts;
use serde::{Deserialize, Serialize};

use crate::validation::field_validators::FieldValidator;
use crate::validation::input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};

/// Rendering of `pub_date` in forms, matching `<input type="datetime-local">`.
pub const PUB_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Post fields as submitted. `pub_date` is wall-clock time in the site's
/// display time zone; `category` and `location` are row ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SimpleObject, InputObject)]
#[graphql(input_name = "PostFormInput")]
#[serde(default)]
pub struct PostForm {
    pub title: String,
    pub text: String,
    pub image: Option<String>,
    pub location: Option<i32>,
    pub category: Option<i32>,
    pub pub_date: String,
}

/// A validated post, with `pub_date` converted to UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedPost {
    pub title: String,
    pub text: String,
    pub image: Option<String>,
    pub location_id: Option<i32>,
    pub category_id: Option<i32>,
    pub pub_date: NaiveDateTime,
}

pub fn to_local_input(at_utc: NaiveDateTime, tz: Tz) -> String {
    tz.from_utc_datetime(&at_utc).format(PUB_DATE_FORMAT).to_string()
}

impl PostForm {
    /// Blank form; the publication date defaults to `now`.
    pub fn initial(now: NaiveDateTime, tz: Tz) -> Self {
        Self {
            pub_date: to_local_input(now, tz),
            ..Default::default()
        }
    }

    pub fn from_model(post: &posts::Model, tz: Tz) -> Self {
        Self {
            title: post.title.clone(),
            text: post.text.clone(),
            image: post.image.clone(),
            location: post.location_id,
            category: post.category_id,
            pub_date: to_local_input(post.pub_date, tz),
        }
    }

    pub fn clean(&self, tz: Tz) -> Result<CleanedPost, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(&self.title, "title", &mut errors);
        FieldValidator::validate_max_length(&self.title, 256, "title", &mut errors);
        FieldValidator::validate_required_string(&self.text, "text", &mut errors);

        let mut pub_date = None;
        if let Some(local) = FieldValidator::validate_datetime(&self.pub_date, "pub_date", &mut errors) {
            match tz.from_local_datetime(&local).earliest() {
                Some(dt) => pub_date = Some(dt.naive_utc()),
                None => errors.add_error(
                    "pub_date",
                    format!("{} does not exist in time zone {}.", self.pub_date.trim(), tz),
                ),
            }
        }

        match pub_date {
            Some(pub_date) if errors.is_empty() => Ok(CleanedPost {
                title: self.title.trim().to_string(),
                text: self.text.clone(),
                image: self
                    .image
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
                location_id: self.location,
                category_id: self.category,
                pub_date,
            }),
            _ => Err(errors),
        }
    }
}

impl InputValidator for PostForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.clean(Tz::UTC).map(|_| ())
    }
}
