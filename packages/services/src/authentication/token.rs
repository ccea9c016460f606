use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use models::users;
use uuid::Uuid;

use super::authenticator::AuthenticationError;
use super::claims::Claims;

/// Signing parameters for access tokens.
#[derive(Clone, Debug)]
pub struct TokenConfig {
    pub secret: String,
    pub issuer: String,
    pub expiration_seconds: i64,
}

/// A bearer token as presented by a client.
#[derive(Clone, Debug)]
pub struct Token(pub String);

impl Token {
    pub fn new(token: String) -> Self {
        Token(token)
    }

    /// Reads an `Authorization` header value of the form `Bearer <token>`.
    pub fn from_authorization_header(value: &str) -> Option<Self> {
        let mut parts = value.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
                Some(Token(token.to_string()))
            }
            _ => None,
        }
    }

    pub fn verify(&self, config: &TokenConfig) -> Result<TokenData<Claims>, AuthenticationError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[config.issuer.as_str()]);

        decode::<Claims>(
            &self.0,
            &DecodingKey::from_secret(config.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AuthenticationError::InvalidToken(e.to_string()))
    }

    pub fn get_user_id(&self, config: &TokenConfig) -> Result<i32, AuthenticationError> {
        let data = self.verify(config)?;
        data.claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthenticationError::InvalidToken("Invalid subject".to_string()))
    }
}

pub fn generate_token(user: &users::Model, config: &TokenConfig) -> Result<String, AuthenticationError> {
    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::seconds(config.expiration_seconds))
        .ok_or_else(|| AuthenticationError::InvalidToken("Expiration out of range".to_string()))?;

    let claims = Claims {
        iss: config.issuer.clone(),
        sub: user.id.to_string(),
        exp: expiration.timestamp(),
        iat: now.timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(config.secret.as_bytes()))
        .map_err(|e| AuthenticationError::InvalidToken(e.to_string()))
}
