pub mod authorized_user;
pub mod category;
pub mod comment;
pub mod page;
pub mod post;
pub mod user;
