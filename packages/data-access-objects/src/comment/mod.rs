use std::collections::HashMap;

use models::comments::{ActiveModel, Column, Entity, Model};
use models::prelude::Comments;
use sea_orm::sea_query::Expr;
use sea_orm::*;

pub struct CommentDao;

impl CommentDao {
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<Model>, DbErr> {
        Comments::find_by_id(id).one(db).await
    }

    pub async fn find_by_post(
        db: &DatabaseConnection,
        post_id: i32,
    ) -> Result<Vec<Model>, DbErr> {
        Comments::find()
            .filter(Column::PostId.eq(post_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Number of comments per post. Posts without comments are absent from
    /// the map.
    pub async fn count_by_posts(
        db: &DatabaseConnection,
        post_ids: &[i32],
    ) -> Result<HashMap<i32, u64>, DbErr> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = Comments::find()
            .select_only()
            .column(Column::PostId)
            .column_as(Expr::col((Entity, Column::Id)).count(), "comment_count")
            .filter(Column::PostId.is_in(post_ids.iter().copied()))
            .group_by(Column::PostId)
            .into_tuple()
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(post_id, count)| (post_id, count.max(0) as u64))
            .collect())
    }

    pub async fn insert(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<Model, DbErr> {
        let res = Comments::insert(model).exec(db).await?;
        Comments::find_by_id(res.last_insert_id)
            .one(db)
            .await?
            .ok_or(DbErr::Custom("Inserted comment not found".to_string()))
    }

    pub async fn update(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<Model, DbErr> {
        Entity::update(model).exec(db).await
    }

    pub async fn delete(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<DeleteResult, DbErr> {
        Entity::delete(model).exec(db).await
    }
}
