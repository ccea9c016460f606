use models::categories::{Column, Model};
use models::prelude::Categories;
use sea_orm::*;

pub struct CategoryDao;

impl CategoryDao {
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<Model>, DbErr> {
        Categories::find_by_id(id).one(db).await
    }

    pub async fn find_published_by_slug(
        db: &DatabaseConnection,
        slug: &str,
    ) -> Result<Option<Model>, DbErr> {
        Categories::find()
            .filter(Column::Slug.eq(slug))
            .filter(Column::IsPublished.eq(true))
            .one(db)
            .await
    }
}
