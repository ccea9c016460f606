use data_access_objects::LocationDao;
use models::locations::Model;
use sea_orm::*;

pub struct LocationRepository;

impl LocationRepository {
    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
        LocationDao::find_by_id(db, id).await
    }
}
