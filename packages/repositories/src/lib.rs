pub mod category;
pub mod comment;
pub mod location;
pub mod post;
pub mod schema;
pub mod user;

pub use category::CategoryRepository;
pub use comment::{CommentRepository, CommentWithAuthor};
pub use location::LocationRepository;
pub use post::{AnnotatedPost, ListingFilter, PostRepository, PostWithRelations};
pub use user::UserRepository;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
