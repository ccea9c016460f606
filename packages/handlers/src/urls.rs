pub fn index() -> String {
    "/".to_string()
}

pub fn post_detail(post_id: i32) -> String {
    format!("/posts/{}/", post_id)
}

pub fn profile(username: &str) -> String {
    format!("/profile/{}/", username)
}
