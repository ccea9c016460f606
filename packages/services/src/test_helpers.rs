use chrono::{NaiveDate, NaiveDateTime};
use models::{categories, comments, posts, users};

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn user(id: i32, username: &str) -> users::Model {
    users::Model {
        id,
        username: username.to_string(),
        first_name: String::new(),
        last_name: String::new(),
        email: format!("{}@example.com", username),
        password: "hashed".to_string(),
        created_at: at(2024, 1, 1, 0),
    }
}

pub fn category(id: i32, slug: &str, is_published: bool) -> categories::Model {
    categories::Model {
        id,
        title: slug.to_string(),
        description: String::new(),
        slug: slug.to_string(),
        is_published,
        created_at: at(2024, 1, 1, 0),
    }
}

pub fn post(
    id: i32,
    author_id: i32,
    category_id: Option<i32>,
    is_published: bool,
    pub_date: NaiveDateTime,
) -> posts::Model {
    posts::Model {
        id,
        title: format!("Post {}", id),
        text: "text".to_string(),
        image: None,
        pub_date,
        is_published,
        author_id,
        category_id,
        location_id: None,
        created_at: at(2024, 1, 1, 0),
    }
}

pub fn comment(id: i32, post_id: i32, author_id: i32) -> comments::Model {
    comments::Model {
        id,
        text: "comment".to_string(),
        post_id,
        author_id,
        created_at: at(2024, 1, 1, 0),
    }
}
