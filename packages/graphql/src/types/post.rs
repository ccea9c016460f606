use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use models::posts;
use repositories::{AnnotatedPost, PostWithRelations};

use super::category::{Category, Location};
use super::comment::Comment;
use super::user::User;

#[derive(SimpleObject)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub image: Option<String>,
    pub pub_date: NaiveDateTime,
    pub is_published: bool,
    pub author_id: i32,
    pub category_id: Option<i32>,
    pub location_id: Option<i32>,
    pub author: Option<User>,
    pub category: Option<Category>,
    pub location: Option<Location>,
    /// Only filled in listings.
    pub comment_count: Option<u64>,
    pub created_at: NaiveDateTime,
}

impl From<posts::Model> for Post {
    fn from(p: posts::Model) -> Self {
        Post {
            id: p.id,
            title: p.title,
            text: p.text,
            image: p.image,
            pub_date: p.pub_date,
            is_published: p.is_published,
            author_id: p.author_id,
            category_id: p.category_id,
            location_id: p.location_id,
            author: None,
            category: None,
            location: None,
            comment_count: None,
            created_at: p.created_at,
        }
    }
}

impl From<PostWithRelations> for Post {
    fn from(p: PostWithRelations) -> Self {
        Post {
            author: p.author.map(User::from),
            category: p.category.map(Category::from),
            location: p.location.map(Location::from),
            ..p.post.into()
        }
    }
}

impl From<AnnotatedPost> for Post {
    fn from(p: AnnotatedPost) -> Self {
        Post {
            comment_count: Some(p.comment_count),
            ..p.post.into()
        }
    }
}

#[derive(SimpleObject)]
pub struct DeletedPost {
    pub id: i32,
}

#[derive(SimpleObject)]
pub struct PostDetail {
    pub post: Post,
    pub comments: Vec<Comment>,
}

impl From<handlers::posts::PostDetail> for PostDetail {
    fn from(d: handlers::posts::PostDetail) -> Self {
        PostDetail {
            post: d.post.into(),
            comments: d.comments.into_iter().map(Comment::from).collect(),
        }
    }
}
