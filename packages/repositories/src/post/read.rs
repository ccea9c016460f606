use data_access_objects::{CommentDao, PostDao};
use sea_orm::*;
use services::{Page, PageWindow, VisibilityFilter, PAGE_SIZE};

use super::{AnnotatedPost, ListingFilter, PostRepository, PostWithRelations};

impl PostRepository {
    /// Every post the public may see under `filter`, newest first.
    pub async fn visible_posts(
        db: &DatabaseConnection,
        filter: &VisibilityFilter,
    ) -> Result<Vec<PostWithRelations>, DbErr> {
        let rows = PostDao::find_matching(db, filter.condition(), None, None).await?;
        Self::attach_relations(db, rows).await
    }

    /// One page of a listing, ordered by publication date descending, with
    /// comment counts. Out-of-range page numbers clamp to the nearest page.
    pub async fn list_posts(
        db: &DatabaseConnection,
        filter: &ListingFilter,
        page: Option<&str>,
    ) -> Result<Page<AnnotatedPost>, DbErr> {
        let condition = filter.condition();
        let count = PostDao::count_matching(db, condition.clone()).await?;
        let window = PageWindow::resolve(page, count, PAGE_SIZE);

        let rows = PostDao::find_matching(
            db,
            condition,
            Some(window.offset()),
            Some(window.per_page),
        )
        .await?;
        let posts = Self::attach_relations(db, rows).await?;

        let ids: Vec<i32> = posts.iter().map(|p| p.post.id).collect();
        let counts = CommentDao::count_by_posts(db, &ids).await?;

        let items = posts
            .into_iter()
            .map(|post| {
                let comment_count = counts.get(&post.post.id).copied().unwrap_or(0);
                AnnotatedPost {
                    post,
                    comment_count,
                }
            })
            .collect();

        Ok(window.into_page(items))
    }

    /// A post regardless of visibility. Callers apply the policy.
    pub async fn get_post(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<PostWithRelations>, DbErr> {
        match PostDao::find_by_id_with_category(db, id).await? {
            Some(row) => Ok(Self::attach_relations(db, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn find_post(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<models::posts::Model>, DbErr> {
        PostDao::find_by_id(db, id).await
    }
}
