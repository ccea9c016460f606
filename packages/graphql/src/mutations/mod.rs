use async_graphql::MergedObject;
mod comments;
mod posts;
mod users;

#[derive(MergedObject, Default)]
pub struct Mutations(
    posts::PostMutation,
    comments::CommentMutation,
    users::UserMutation,
);
