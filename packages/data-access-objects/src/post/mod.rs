use models::categories;
use models::posts::{ActiveModel, Column, Entity, Model};
use models::prelude::{Categories, Posts};
use sea_orm::*;

pub struct PostDao;

impl PostDao {
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<Model>, DbErr> {
        Posts::find_by_id(id).one(db).await
    }

    pub async fn find_by_id_with_category(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<(Model, Option<categories::Model>)>, DbErr> {
        Posts::find_by_id(id)
            .find_also_related(Categories)
            .one(db)
            .await
    }

    /// Counts posts matching `filter`. Categories are left-joined so the
    /// filter may reference their columns.
    pub async fn count_matching(
        db: &DatabaseConnection,
        filter: Condition,
    ) -> Result<u64, DbErr> {
        Posts::find()
            .left_join(Categories)
            .filter(filter)
            .count(db)
            .await
    }

    pub async fn find_matching(
        db: &DatabaseConnection,
        filter: Condition,
        offset: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<(Model, Option<categories::Model>)>, DbErr> {
        Posts::find()
            .find_also_related(Categories)
            .filter(filter)
            .order_by_desc(Column::PubDate)
            .order_by_desc(Column::Id)
            .offset(offset)
            .limit(limit)
            .all(db)
            .await
    }

    pub async fn insert(
        db: &DatabaseConnection,
        model: ActiveModel,
    ) -> Result<Model, DbErr> {
        let res = Posts::insert(model).exec(db).await?;
        Posts::find_by_id(res.last_insert_id)
            .one(db)
            .await?
            .ok_or(DbErr::Custom("Inserted post not found".to_string()))
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
