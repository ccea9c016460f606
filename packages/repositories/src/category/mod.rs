use data_access_objects::CategoryDao;
use models::categories::Model;
use sea_orm::*;

pub struct CategoryRepository;

impl CategoryRepository {
    /// Unpublished categories resolve to `None`, same as unknown slugs.
    pub async fn find_published_by_slug(
        db: &DatabaseConnection,
        slug: &str,
    ) -> Result<Option<Model>, DbErr> {
        CategoryDao::find_published_by_slug(db, slug).await
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
        CategoryDao::find_by_id(db, id).await
    }
}
