use chrono::NaiveDateTime;
use chrono_tz::Tz;
use models::{categories, posts, users};
use repositories::{
    AnnotatedPost, CategoryRepository, CommentRepository, CommentWithAuthor, ListingFilter,
    LocationRepository, PostRepository, PostWithRelations,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use services::{
    can_mutate, CleanedPost, CommentForm, Page, PostForm, ValidationErrors, ValidationErrorsExt,
    VisibilityFilter,
};

use crate::outcome::{ownership_redirect, Guarded, HandlerError, HandlerResult, Outcome};
use crate::urls;

const INVALID_CHOICE: &str =
    "Select a valid choice. That choice is not one of the available choices.";

#[derive(Debug, Serialize)]
pub struct PostDetail {
    pub post: PostWithRelations,
    pub comments: Vec<CommentWithAuthor>,
    pub form: CommentForm,
}

#[derive(Debug, Serialize)]
pub struct CategoryPage {
    pub category: categories::Model,
    pub page: Page<AnnotatedPost>,
}

pub async fn index(
    db: &DatabaseConnection,
    now: NaiveDateTime,
    page: Option<&str>,
) -> HandlerResult<Page<AnnotatedPost>> {
    let filter = ListingFilter::Visible(VisibilityFilter::new(now));
    Ok(PostRepository::list_posts(db, &filter, page).await?)
}

/// The author always sees their post. Everyone else sees it only while it
/// is publicly visible; otherwise it does not exist for them.
pub async fn post_detail(
    db: &DatabaseConnection,
    viewer: Option<&users::Model>,
    now: NaiveDateTime,
    post_id: i32,
) -> HandlerResult<PostDetail> {
    let post = PostRepository::get_post(db, post_id)
        .await?
        .ok_or(HandlerError::NotFound("post"))?;

    if !can_mutate(viewer, &post.post)
        && !VisibilityFilter::new(now).admits(&post.post, post.category.as_ref())
    {
        return Err(HandlerError::NotFound("post"));
    }

    let comments = CommentRepository::list_for_post(db, post_id).await?;
    Ok(PostDetail {
        post,
        comments,
        form: CommentForm::default(),
    })
}

pub async fn category_posts(
    db: &DatabaseConnection,
    now: NaiveDateTime,
    slug: &str,
    page: Option<&str>,
) -> HandlerResult<CategoryPage> {
    let category = CategoryRepository::find_published_by_slug(db, slug)
        .await?
        .ok_or(HandlerError::NotFound("category"))?;

    let filter = ListingFilter::Visible(VisibilityFilter::new(now).in_category(slug));
    let page = PostRepository::list_posts(db, &filter, page).await?;
    Ok(CategoryPage { category, page })
}

pub fn new_post_form(now: NaiveDateTime, tz: Tz) -> PostForm {
    PostForm::initial(now, tz)
}

pub async fn create_post(
    db: &DatabaseConnection,
    user: &users::Model,
    now: NaiveDateTime,
    tz: Tz,
    form: PostForm,
) -> HandlerResult<Outcome<posts::Model>> {
    let cleaned = match clean_post_form(db, &form, tz).await? {
        Ok(cleaned) => cleaned,
        Err(errors) => return Ok(Outcome::Invalid { errors }),
    };

    let post = PostRepository::create_post(db, user.id, cleaned, now).await?;
    tracing::info!(post_id = post.id, author_id = user.id, "post created");

    Ok(Outcome::Applied {
        value: post,
        location: urls::profile(&user.username),
    })
}

pub async fn edit_post_form(
    db: &DatabaseConnection,
    user: Option<&users::Model>,
    tz: Tz,
    post_id: i32,
) -> HandlerResult<Guarded<PostForm>> {
    let post = find_post(db, post_id).await?;
    if let Some(location) = ownership_redirect(user, &post) {
        return Ok(Guarded::Redirect { location });
    }
    Ok(Guarded::Allowed {
        form: PostForm::from_model(&post, tz),
    })
}

pub async fn update_post(
    db: &DatabaseConnection,
    user: Option<&users::Model>,
    tz: Tz,
    post_id: i32,
    form: PostForm,
) -> HandlerResult<Outcome<posts::Model>> {
    let post = find_post(db, post_id).await?;
    if let Some(location) = ownership_redirect(user, &post) {
        return Ok(Outcome::redirect(location));
    }

    let cleaned = match clean_post_form(db, &form, tz).await? {
        Ok(cleaned) => cleaned,
        Err(errors) => return Ok(Outcome::Invalid { errors }),
    };

    let post = PostRepository::update_post(db, post, cleaned).await?;
    tracing::info!(post_id = post.id, "post updated");

    Ok(Outcome::Applied {
        location: urls::post_detail(post.id),
        value: post,
    })
}

/// Confirmation page. The form carries the current values for display only.
pub async fn delete_post_form(
    db: &DatabaseConnection,
    user: Option<&users::Model>,
    tz: Tz,
    post_id: i32,
) -> HandlerResult<Guarded<PostForm>> {
    edit_post_form(db, user, tz, post_id).await
}

pub async fn delete_post(
    db: &DatabaseConnection,
    user: Option<&users::Model>,
    post_id: i32,
) -> HandlerResult<Outcome<i32>> {
    let post = find_post(db, post_id).await?;
    if let Some(location) = ownership_redirect(user, &post) {
        return Ok(Outcome::redirect(location));
    }

    let id = PostRepository::delete_post(db, post).await?;
    tracing::info!(post_id = id, "post deleted");

    Ok(Outcome::Applied {
        value: id,
        location: urls::index(),
    })
}

async fn find_post(db: &DatabaseConnection, post_id: i32) -> HandlerResult<posts::Model> {
    PostRepository::find_post(db, post_id)
        .await?
        .ok_or(HandlerError::NotFound("post"))
}

/// Field validation plus existence of the chosen category and location.
async fn clean_post_form(
    db: &DatabaseConnection,
    form: &PostForm,
    tz: Tz,
) -> HandlerResult<Result<CleanedPost, ValidationErrors>> {
    let mut errors = ValidationErrors::new();

    if let Some(id) = form.category {
        if CategoryRepository::find_by_id(db, id).await?.is_none() {
            errors.add_error("category", INVALID_CHOICE.to_string());
        }
    }
    if let Some(id) = form.location {
        if LocationRepository::find_by_id(db, id).await?.is_none() {
            errors.add_error("location", INVALID_CHOICE.to_string());
        }
    }

    match form.clean(tz) {
        Ok(cleaned) if errors.is_empty() => Ok(Ok(cleaned)),
        Ok(_) => Ok(Err(errors)),
        Err(form_errors) => {
            errors.merge(form_errors);
            Ok(Err(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;
    use repositories::test_helpers::*;

    fn form(title: &str, category: Option<i32>) -> PostForm {
        PostForm {
            title: title.to_string(),
            text: "Happy families are all alike.".to_string(),
            image: None,
            location: None,
            category,
            pub_date: "2024-06-14T10:00".to_string(),
        }
    }

    // ============= read views =============

    #[tokio::test]
    async fn test_index_lists_only_visible_posts() {
        let db = setup_test_db().await;
        let author = create_test_user(&db, "idx_author").await;
        let hidden = create_test_category(&db, "hidden", false).await;
        create_test_post(&db, author.id, None, "Visible", true, days_ago(1)).await;
        create_test_post(&db, author.id, None, "Draft", false, days_ago(1)).await;
        create_test_post(&db, author.id, Some(hidden.id), "Hidden", true, days_ago(1)).await;
        create_test_post(&db, author.id, None, "Tomorrow", true, days_ahead(1)).await;

        let page = index(&db, test_now(), None).await.unwrap();

        assert_eq!(page.count, 1);
        assert_eq!(page.items[0].post.post.title, "Visible");
    }

    #[tokio::test]
    async fn test_post_detail_unpublished_visible_to_author_only() {
        let db = setup_test_db().await;
        let author = create_test_user(&db, "det_author").await;
        let other = create_test_user(&db, "det_other").await;
        let post = create_test_post(&db, author.id, None, "Draft", false, days_ago(1)).await;

        let detail = post_detail(&db, Some(&author), test_now(), post.id).await.unwrap();
        assert_eq!(detail.post.post.id, post.id);
        assert!(detail.form.text.is_empty());

        let err = post_detail(&db, Some(&other), test_now(), post.id).await.unwrap_err();
        assert!(matches!(err, HandlerError::NotFound("post")));

        let err = post_detail(&db, None, test_now(), post.id).await.unwrap_err();
        assert!(matches!(err, HandlerError::NotFound("post")));
    }

    #[tokio::test]
    async fn test_post_detail_includes_comments_in_order() {
        let db = setup_test_db().await;
        let author = create_test_user(&db, "detc_author").await;
        let post = create_test_post(&db, author.id, None, "Post", true, days_ago(2)).await;
        create_test_comment(&db, post.id, author.id, "one").await;
        create_test_comment(&db, post.id, author.id, "two").await;

        let detail = post_detail(&db, None, test_now(), post.id).await.unwrap();

        let texts: Vec<&str> = detail.comments.iter().map(|c| c.comment.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_post_detail_missing_post() {
        let db = setup_test_db().await;
        let err = post_detail(&db, None, test_now(), 12345).await.unwrap_err();
        assert!(matches!(err, HandlerError::NotFound("post")));
    }

    #[tokio::test]
    async fn test_category_posts_requires_published_category() {
        let db = setup_test_db().await;
        let author = create_test_user(&db, "cat_author").await;
        let open = create_test_category(&db, "open", true).await;
        create_test_category(&db, "closed", false).await;
        create_test_post(&db, author.id, Some(open.id), "In open", true, days_ago(1)).await;
        create_test_post(&db, author.id, None, "Elsewhere", true, days_ago(1)).await;

        let listing = category_posts(&db, test_now(), "open", None).await.unwrap();
        assert_eq!(listing.category.slug, "open");
        assert_eq!(listing.page.count, 1);

        let err = category_posts(&db, test_now(), "closed", None).await.unwrap_err();
        assert!(matches!(err, HandlerError::NotFound("category")));

        let err = category_posts(&db, test_now(), "missing", None).await.unwrap_err();
        assert!(matches!(err, HandlerError::NotFound("category")));
    }

    // ============= create =============

    #[test]
    fn test_new_post_form_defaults_pub_date_to_now() {
        let form = new_post_form(test_now(), chrono_tz::Europe::Moscow);
        assert_eq!(form.pub_date, "2024-06-15T15:00");
    }

    #[tokio::test]
    async fn test_create_post_redirects_to_profile() {
        let db = setup_test_db().await;
        let user = create_test_user(&db, "creator").await;
        let category = create_test_category(&db, "novels", true).await;

        let outcome = create_post(&db, &user, test_now(), Tz::UTC, form("New", Some(category.id)))
            .await
            .unwrap();

        match outcome {
            Outcome::Applied { value, location } => {
                assert_eq!(location, "/profile/creator/");
                assert_eq!(value.author_id, user.id);
                assert_eq!(value.category_id, Some(category.id));
                assert!(value.is_published);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_post_rejects_unknown_category_and_missing_title() {
        let db = setup_test_db().await;
        let user = create_test_user(&db, "bad_creator").await;

        let outcome = create_post(&db, &user, test_now(), Tz::UTC, form("", Some(999)))
            .await
            .unwrap();

        match outcome {
            Outcome::Invalid { errors } => {
                assert!(errors.contains_key("title"));
                assert_eq!(errors["category"], vec![INVALID_CHOICE.to_string()]);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(index(&db, days_ahead(10), None).await.unwrap().count, 0);
    }

    // ============= update / delete =============

    #[tokio::test]
    async fn test_update_post_by_author() {
        let db = setup_test_db().await;
        let author = create_test_user(&db, "upd_author").await;
        let post = create_test_post(&db, author.id, None, "Old", true, days_ago(1)).await;

        let outcome = update_post(&db, Some(&author), Tz::UTC, post.id, form("New", None))
            .await
            .unwrap();

        assert_eq!(outcome.location(), Some(format!("/posts/{}/", post.id).as_str()));
        let stored = PostRepository::find_post(&db, post.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "New");
    }

    #[tokio::test]
    async fn test_update_post_by_other_user_redirects_without_change() {
        let db = setup_test_db().await;
        let author = create_test_user(&db, "upd_owner").await;
        let other = create_test_user(&db, "upd_intruder").await;
        let post = create_test_post(&db, author.id, None, "Mine", true, days_ago(1)).await;

        for user in [Some(&other), None] {
            let outcome = update_post(&db, user, Tz::UTC, post.id, form("Theirs", None))
                .await
                .unwrap();
            match outcome {
                Outcome::Redirect { location } => {
                    assert_eq!(location, format!("/posts/{}/", post.id))
                }
                other => panic!("unexpected outcome: {:?}", other),
            }
        }

        let stored = PostRepository::find_post(&db, post.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Mine");
    }

    #[tokio::test]
    async fn test_edit_post_form_prefills_for_author() {
        let db = setup_test_db().await;
        let author = create_test_user(&db, "form_author").await;
        let other = create_test_user(&db, "form_other").await;
        let post = create_test_post(&db, author.id, None, "Prefill", true, days_ago(1)).await;

        match edit_post_form(&db, Some(&author), Tz::UTC, post.id).await.unwrap() {
            Guarded::Allowed { form } => {
                assert_eq!(form.title, "Prefill");
                assert_eq!(form.pub_date, "2024-06-14T12:00");
            }
            other => panic!("unexpected: {:?}", other),
        }

        assert!(matches!(
            delete_post_form(&db, Some(&other), Tz::UTC, post.id).await.unwrap(),
            Guarded::Redirect { .. }
        ));

        let err = edit_post_form(&db, Some(&author), Tz::UTC, 999).await.unwrap_err();
        assert!(matches!(err, HandlerError::NotFound("post")));
    }

    #[tokio::test]
    async fn test_delete_post_by_author_goes_to_index() {
        let db = setup_test_db().await;
        let author = create_test_user(&db, "del_author").await;
        let other = create_test_user(&db, "del_other").await;
        let post = create_test_post(&db, author.id, None, "Doomed", true, days_ago(1)).await;

        let refused = delete_post(&db, Some(&other), post.id).await.unwrap();
        assert!(matches!(refused, Outcome::Redirect { .. }));
        assert!(PostRepository::find_post(&db, post.id).await.unwrap().is_some());

        let outcome = delete_post(&db, Some(&author), post.id).await.unwrap();
        assert_eq!(outcome.location(), Some("/"));
        assert!(PostRepository::find_post(&db, post.id).await.unwrap().is_none());
    }
}
