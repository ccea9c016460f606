use models::locations::{Column, Model};
use models::prelude::Locations;
use sea_orm::*;

pub struct LocationDao;

impl LocationDao {
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<Model>, DbErr> {
        Locations::find_by_id(id).one(db).await
    }

    pub async fn find_by_ids(
        db: &DatabaseConnection,
        ids: &[i32],
    ) -> Result<Vec<Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Locations::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .all(db)
            .await
    }
}
