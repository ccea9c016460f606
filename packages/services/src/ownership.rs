use models::{comments, posts, users};

/// Content owned by a single author and attached to a post.
pub trait Authored {
    fn author_id(&self) -> i32;

    /// Post whose detail page shows this object.
    fn owning_post_id(&self) -> i32;
}

impl Authored for posts::Model {
    fn author_id(&self) -> i32 {
        self.author_id
    }

    fn owning_post_id(&self) -> i32 {
        self.id
    }
}

impl Authored for comments::Model {
    fn author_id(&self) -> i32 {
        self.author_id
    }

    fn owning_post_id(&self) -> i32 {
        self.post_id
    }
}

/// Only the author may edit or delete. Anonymous users never can.
pub fn can_mutate<T: Authored + ?Sized>(user: Option<&users::Model>, object: &T) -> bool {
    user.map(|u| u.id == object.author_id()).unwrap_or(false)
}
