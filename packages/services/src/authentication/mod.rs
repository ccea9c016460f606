pub mod authenticator;
pub mod claims;
pub mod hashing;
pub mod token;

pub use authenticator::*;
pub use hashing::{hash_password, verify_password};
pub use token::*;
