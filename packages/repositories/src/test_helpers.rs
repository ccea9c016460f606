use chrono::{Duration, NaiveDate, NaiveDateTime};
use models::{categories, comments, locations, posts, users};
use sea_orm::*;

use crate::schema::create_schema;

pub async fn setup_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    // every pooled connection would otherwise get its own empty database
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to test database");
    create_schema(&db).await.expect("Failed to create schema");
    db
}

/// Fixed reference time for tests.
pub fn test_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn days_ago(days: i64) -> NaiveDateTime {
    test_now() - Duration::days(days)
}

pub fn days_ahead(days: i64) -> NaiveDateTime {
    test_now() + Duration::days(days)
}

pub async fn create_test_user(db: &DatabaseConnection, username: &str) -> users::Model {
    let user = users::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        first_name: ActiveValue::Set(String::new()),
        last_name: ActiveValue::Set(String::new()),
        email: ActiveValue::Set(format!("{}@example.com", username)),
        password: ActiveValue::Set("hashed".to_string()),
        created_at: ActiveValue::Set(days_ago(365)),
        ..Default::default()
    };

    user.insert(db).await.expect("Failed to create test user")
}

pub async fn create_test_category(
    db: &DatabaseConnection,
    slug: &str,
    is_published: bool,
) -> categories::Model {
    let category = categories::ActiveModel {
        title: ActiveValue::Set(format!("Category {}", slug)),
        description: ActiveValue::Set(String::new()),
        slug: ActiveValue::Set(slug.to_string()),
        is_published: ActiveValue::Set(is_published),
        created_at: ActiveValue::Set(days_ago(365)),
        ..Default::default()
    };

    category.insert(db).await.expect("Failed to create test category")
}

pub async fn create_test_location(db: &DatabaseConnection, name: &str) -> locations::Model {
    let location = locations::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        is_published: ActiveValue::Set(true),
        created_at: ActiveValue::Set(days_ago(365)),
        ..Default::default()
    };

    location.insert(db).await.expect("Failed to create test location")
}

pub async fn create_test_post(
    db: &DatabaseConnection,
    author_id: i32,
    category_id: Option<i32>,
    title: &str,
    is_published: bool,
    pub_date: NaiveDateTime,
) -> posts::Model {
    let post = posts::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        text: ActiveValue::Set(format!("{} text", title)),
        image: ActiveValue::Set(None),
        pub_date: ActiveValue::Set(pub_date),
        is_published: ActiveValue::Set(is_published),
        author_id: ActiveValue::Set(author_id),
        category_id: ActiveValue::Set(category_id),
        location_id: ActiveValue::Set(None),
        created_at: ActiveValue::Set(pub_date),
        ..Default::default()
    };

    post.insert(db).await.expect("Failed to create test post")
}

pub async fn create_test_comment(
    db: &DatabaseConnection,
    post_id: i32,
    author_id: i32,
    text: &str,
) -> comments::Model {
    let comment = comments::ActiveModel {
        text: ActiveValue::Set(text.to_string()),
        post_id: ActiveValue::Set(post_id),
        author_id: ActiveValue::Set(author_id),
        created_at: ActiveValue::Set(test_now()),
        ..Default::default()
    };

    comment.insert(db).await.expect("Failed to create test comment")
}
