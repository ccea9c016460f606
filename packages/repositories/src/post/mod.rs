mod create;
mod delete;
mod read;
mod update;

use std::collections::HashMap;

use data_access_objects::{LocationDao, UserDao};
use models::{categories, locations, posts, users};
use sea_orm::*;
use serde::Serialize;
use services::VisibilityFilter;

/// A post with the rows a listing or detail page displays next to it.
#[derive(Clone, Debug, Serialize)]
pub struct PostWithRelations {
    #[serde(flatten)]
    pub post: posts::Model,
    pub author: Option<users::Model>,
    pub category: Option<categories::Model>,
    pub location: Option<locations::Model>,
}

/// Listing entry: the post plus its comment count at query time.
#[derive(Clone, Debug, Serialize)]
pub struct AnnotatedPost {
    #[serde(flatten)]
    pub post: PostWithRelations,
    pub comment_count: u64,
}

/// Which posts a listing page shows.
#[derive(Clone, Debug)]
pub enum ListingFilter {
    /// Publicly visible posts, optionally in one category.
    Visible(VisibilityFilter),
    /// Posts by one author. `visibility` is `None` when the author is the
    /// one looking, so drafts and scheduled posts are included.
    ByAuthor {
        author_id: i32,
        visibility: Option<VisibilityFilter>,
    },
}

impl ListingFilter {
    pub fn condition(&self) -> Condition {
        match self {
            ListingFilter::Visible(filter) => filter.condition(),
            ListingFilter::ByAuthor {
                author_id,
                visibility,
            } => {
                let cond = Condition::all().add(posts::Column::AuthorId.eq(*author_id));
                match visibility {
                    Some(filter) => cond.add(filter.condition()),
                    None => cond,
                }
            }
        }
    }
}

pub struct PostRepository;

impl PostRepository {
    /// Loads authors and locations for a batch of posts in two queries.
    pub(crate) async fn attach_relations(
        db: &DatabaseConnection,
        rows: Vec<(posts::Model, Option<categories::Model>)>,
    ) -> Result<Vec<PostWithRelations>, DbErr> {
        let mut author_ids: Vec<i32> = rows.iter().map(|(p, _)| p.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let mut location_ids: Vec<i32> = rows.iter().filter_map(|(p, _)| p.location_id).collect();
        location_ids.sort_unstable();
        location_ids.dedup();

        let authors: HashMap<i32, users::Model> = UserDao::find_by_ids(db, &author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();
        let locations: HashMap<i32, locations::Model> = LocationDao::find_by_ids(db, &location_ids)
            .await?
            .into_iter()
            .map(|l| (l.id, l))
            .collect();

        Ok(rows
            .into_iter()
            .map(|(post, category)| PostWithRelations {
                author: authors.get(&post.author_id).cloned(),
                location: post.location_id.and_then(|id| locations.get(&id).cloned()),
                category,
                post,
            })
            .collect())
    }
}
