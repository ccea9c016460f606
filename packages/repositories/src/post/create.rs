use chrono::NaiveDateTime;
use data_access_objects::PostDao;
use models::posts;
use sea_orm::*;
use services::CleanedPost;

use super::PostRepository;

impl PostRepository {
    /// New posts are published; `pub_date` alone decides when they appear.
    pub async fn create_post(
        db: &DatabaseConnection,
        author_id: i32,
        input: CleanedPost,
        now: NaiveDateTime,
    ) -> Result<posts::Model, DbErr> {
        let model = posts::ActiveModel {
            title: ActiveValue::set(input.title),
            text: ActiveValue::set(input.text),
            image: ActiveValue::set(input.image),
            pub_date: ActiveValue::set(input.pub_date),
            is_published: ActiveValue::set(true),
            author_id: ActiveValue::set(author_id),
            category_id: ActiveValue::set(input.category_id),
            location_id: ActiveValue::set(input.location_id),
            created_at: ActiveValue::set(now),
            ..Default::default()
        };

        PostDao::insert(db, model).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::PostRepository;
    use crate::test_helpers::*;
    use services::CleanedPost;

    fn input(category_id: Option<i32>) -> CleanedPost {
        CleanedPost {
            title: "Resurrection".into(),
            text: "Body".into(),
            image: Some("posts/cover.jpg".into()),
            location_id: None,
            category_id,
            pub_date: days_ago(1),
        }
    }

    #[tokio::test]
    async fn test_create_post_stores_fields() {
        let db = setup_test_db().await;
        let user = create_test_user(&db, "repo_create").await;
        let cat = create_test_category(&db, "novels", true).await;

        let post = PostRepository::create_post(&db, user.id, input(Some(cat.id)), test_now())
            .await
            .unwrap();

        assert!(post.id > 0);
        assert_eq!(post.title, "Resurrection");
        assert_eq!(post.image.as_deref(), Some("posts/cover.jpg"));
        assert_eq!(post.author_id, user.id);
        assert_eq!(post.category_id, Some(cat.id));
        assert_eq!(post.pub_date, days_ago(1));
        assert_eq!(post.created_at, test_now());
        assert!(post.is_published);
    }

    #[tokio::test]
    async fn test_create_post_unknown_author_fails() {
        let db = setup_test_db().await;

        let result = PostRepository::create_post(&db, 999, input(None), test_now()).await;
        assert!(result.is_err());
    }
}
