pub mod context;
pub mod requires_auth;
