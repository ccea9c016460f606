use data_access_objects::PostDao;
use models::posts::Model;
use sea_orm::*;
use services::CleanedPost;

use super::PostRepository;

impl PostRepository {
    /// Replaces the editable fields. Author and publication flag are kept.
    pub async fn update_post(
        db: &DatabaseConnection,
        existing: Model,
        input: CleanedPost,
    ) -> Result<Model, DbErr> {
        let mut am = existing.into_active_model();
        am.title = ActiveValue::set(input.title);
        am.text = ActiveValue::set(input.text);
        am.image = ActiveValue::set(input.image);
        am.pub_date = ActiveValue::set(input.pub_date);
        am.category_id = ActiveValue::set(input.category_id);
        am.location_id = ActiveValue::set(input.location_id);

        PostDao::update(db, am).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::PostRepository;
    use crate::test_helpers::*;
    use services::CleanedPost;

    #[tokio::test]
    async fn test_update_post_updates_fields() {
        let db = setup_test_db().await;
        let user = create_test_user(&db, "repo_update").await;
        let location = create_test_location(&db, "Moscow").await;
        let post = create_test_post(&db, user.id, None, "Original", false, days_ago(2)).await;

        let updated = PostRepository::update_post(
            &db,
            post.clone(),
            CleanedPost {
                title: "Updated Title".into(),
                text: "new text".into(),
                image: None,
                location_id: Some(location.id),
                category_id: None,
                pub_date: days_ahead(1),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.id, post.id);
        assert_eq!(updated.title, "Updated Title");
        assert_eq!(updated.text, "new text");
        assert_eq!(updated.location_id, Some(location.id));
        assert_eq!(updated.pub_date, days_ahead(1));
        assert_eq!(updated.author_id, user.id);
        assert!(!updated.is_published);
    }
}
