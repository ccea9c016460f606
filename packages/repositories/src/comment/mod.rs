use std::collections::HashMap;

use chrono::NaiveDateTime;
use data_access_objects::{CommentDao, UserDao};
use models::{comments, users};
use sea_orm::*;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: comments::Model,
    pub author: Option<users::Model>,
}

pub struct CommentRepository;

impl CommentRepository {
    /// Comments on a post, oldest first, with their authors.
    pub async fn list_for_post(
        db: &DatabaseConnection,
        post_id: i32,
    ) -> Result<Vec<CommentWithAuthor>, DbErr> {
        let comments = CommentDao::find_by_post(db, post_id).await?;

        let mut author_ids: Vec<i32> = comments.iter().map(|c| c.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();
        let authors: HashMap<i32, users::Model> = UserDao::find_by_ids(db, &author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(comments
            .into_iter()
            .map(|comment| CommentWithAuthor {
                author: authors.get(&comment.author_id).cloned(),
                comment,
            })
            .collect())
    }

    pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<comments::Model>, DbErr> {
        CommentDao::find_by_id(db, id).await
    }

    pub async fn create(
        db: &DatabaseConnection,
        post_id: i32,
        author_id: i32,
        text: String,
        now: NaiveDateTime,
    ) -> Result<comments::Model, DbErr> {
        let model = comments::ActiveModel {
            text: ActiveValue::set(text),
            post_id: ActiveValue::set(post_id),
            author_id: ActiveValue::set(author_id),
            created_at: ActiveValue::set(now),
            ..Default::default()
        };
        CommentDao::insert(db, model).await
    }

    pub async fn update_text(
        db: &DatabaseConnection,
        existing: comments::Model,
        text: String,
    ) -> Result<comments::Model, DbErr> {
        let mut am = existing.into_active_model();
        am.text = ActiveValue::set(text);
        CommentDao::update(db, am).await
    }

    pub async fn delete(db: &DatabaseConnection, comment: comments::Model) -> Result<i32, DbErr> {
        let id = comment.id;
        CommentDao::delete(db, comment.into_active_model()).await?;
        Ok(id)
    }
}
