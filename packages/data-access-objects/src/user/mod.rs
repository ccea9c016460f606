use models::prelude::Users;
use models::users::{ActiveModel, Column, Entity, Model};
use sea_orm::*;

pub struct UserDao;

impl UserDao {
    pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Users::find().count(db).await
    }

    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        let res = Users::insert(model).exec(db).await?;
        Users::find_by_id(res.last_insert_id)
            .one(db)
            .await?
            .ok_or(DbErr::Custom("Inserted user not found".to_string()))
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
        Users::find_by_id(id).one(db).await
    }

    pub async fn find_by_ids(db: &DatabaseConnection, ids: &[i32]) -> Result<Vec<Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Users::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .all(db)
            .await
    }

    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<Model>, DbErr> {
        Users::find()
            .filter(Column::Username.eq(username))
            .one(db)
            .await
    }

    pub async fn update(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        Entity::update(model).exec(db).await
    }
}
