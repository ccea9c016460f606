//! Request handlers for the blog. Each route has one function; callers pass
//! the database, the acting user, the evaluation time and the display time
//! zone explicitly.

pub mod accounts;
pub mod comments;
pub mod outcome;
pub mod posts;
pub mod profile;
pub mod urls;

pub use outcome::{Guarded, HandlerError, HandlerResult, Outcome};
