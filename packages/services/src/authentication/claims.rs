use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct Claims {
    pub iss: String,
    /// User id.
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}
