pub mod prelude;

pub mod categories;
pub mod comments;
pub mod locations;
pub mod posts;
pub mod users;
