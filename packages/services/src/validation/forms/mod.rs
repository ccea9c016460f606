mod account_forms;
mod comment_form;
mod post_form;
mod profile_form;

pub use account_forms::{SignInForm, SignUpForm};
pub use comment_form::CommentForm;
pub use post_form::{to_local_input, CleanedPost, PostForm, PUB_DATE_FORMAT};
pub use profile_form::ProfileForm;
