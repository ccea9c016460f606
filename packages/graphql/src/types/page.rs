use async_graphql::SimpleObject;
use repositories::AnnotatedPost;
use services::Page;

use super::category::Category;
use super::post::Post;
use super::user::User;

#[derive(SimpleObject)]
pub struct PostPage {
    pub items: Vec<Post>,
    pub number: u64,
    pub num_pages: u64,
    pub count: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl From<Page<AnnotatedPost>> for PostPage {
    fn from(page: Page<AnnotatedPost>) -> Self {
        let page = page.map(Post::from);
        PostPage {
            items: page.items,
            number: page.number,
            num_pages: page.num_pages,
            count: page.count,
            has_next: page.has_next,
            has_previous: page.has_previous,
        }
    }
}

#[derive(SimpleObject)]
pub struct CategoryPosts {
    pub category: Category,
    pub page: PostPage,
}

#[derive(SimpleObject)]
pub struct Profile {
    pub user: User,
    pub page: PostPage,
}
