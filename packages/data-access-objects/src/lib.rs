pub mod category;
pub mod comment;
pub mod location;
pub mod post;
pub mod user;

pub use category::CategoryDao;
pub use comment::CommentDao;
pub use location::LocationDao;
pub use post::PostDao;
pub use user::UserDao;
