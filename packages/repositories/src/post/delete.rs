use data_access_objects::PostDao;
use models::posts::Model;
use sea_orm::*;

use super::PostRepository;

impl PostRepository {
    /// Removes the post; its comments go with it.
    pub async fn delete_post(db: &DatabaseConnection, post: Model) -> Result<i32, DbErr> {
        let id = post.id;
        PostDao::delete(db, post.into_active_model()).await?;
        Ok(id)
    }
}
