pub mod authentication;
pub mod ownership;
pub mod pagination;
pub mod validation;
pub mod visibility;

#[cfg(test)]
pub mod test_helpers;

pub use authentication::*;
pub use ownership::{can_mutate, Authored};
pub use pagination::{Page, PageWindow, PAGE_SIZE};
pub use validation::*;
pub use visibility::VisibilityFilter;
