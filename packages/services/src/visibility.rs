use chrono::NaiveDateTime;
use models::{categories, posts};
use sea_orm::{ColumnTrait, Condition};

/// Public visibility of posts at a fixed point in time.
///
/// A post is visible when it is published, dated strictly before `as_of`,
/// and either has no category or belongs to a published one. The time is
/// always supplied by the caller so results are reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityFilter {
    pub as_of: NaiveDateTime,
    pub category_slug: Option<String>,
}

impl VisibilityFilter {
    pub fn new(as_of: NaiveDateTime) -> Self {
        Self {
            as_of,
            category_slug: None,
        }
    }

    pub fn in_category(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = Some(slug.into());
        self
    }

    /// Query condition for the predicate. The categories table must be
    /// left-joined onto posts by the query using it.
    pub fn condition(&self) -> Condition {
        let mut cond = Condition::all()
            .add(posts::Column::IsPublished.eq(true))
            .add(posts::Column::PubDate.lt(self.as_of))
            .add(
                Condition::any()
                    .add(posts::Column::CategoryId.is_null())
                    .add(categories::Column::IsPublished.eq(true)),
            );

        if let Some(slug) = &self.category_slug {
            cond = cond.add(categories::Column::Slug.eq(slug.as_str()));
        }
        cond
    }

    /// In-memory form of [`condition`](Self::condition). `category` must be
    /// the post's own category row, if it has one.
    pub fn admits(&self, post: &posts::Model, category: Option<&categories::Model>) -> bool {
        if !post.is_published || post.pub_date >= self.as_of {
            return false;
        }

        let category_ok = match (post.category_id, category) {
            (None, _) => true,
            (Some(_), Some(c)) => c.is_published,
            (Some(_), None) => false,
        };
        if !category_ok {
            return false;
        }

        match &self.category_slug {
            Some(slug) => category.map(|c| &c.slug == slug).unwrap_or(false),
            None => true,
        }
    }
}
