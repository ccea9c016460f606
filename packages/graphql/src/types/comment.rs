use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use models::comments;
use repositories::CommentWithAuthor;

use super::user::User;

#[derive(SimpleObject)]
pub struct Comment {
    pub id: i32,
    pub text: String,
    pub post_id: i32,
    pub author_id: i32,
    pub author: Option<User>,
    pub created_at: NaiveDateTime,
}

impl From<comments::Model> for Comment {
    fn from(c: comments::Model) -> Self {
        Comment {
            id: c.id,
            text: c.text,
            post_id: c.post_id,
            author_id: c.author_id,
            author: None,
            created_at: c.created_at,
        }
    }
}

impl From<CommentWithAuthor> for Comment {
    fn from(c: CommentWithAuthor) -> Self {
        Comment {
            author: c.author.map(User::from),
            ..c.comment.into()
        }
    }
}

#[derive(SimpleObject)]
pub struct DeletedComment {
    pub id: i32,
}
