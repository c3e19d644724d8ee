use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Lifetime of an issued token. Expiry is the only invalidation mechanism;
/// there is no refresh or revocation.
const TOKEN_TTL_HOURS: i64 = 72;

/// Claims carried inside an identity token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Authenticated user id (token subject).
    pub user_id: i32,
    /// Expiration timestamp, seconds since the Unix epoch.
    pub exp: i64,
}

/// Issues and verifies the signed bearer credentials binding a user id to an
/// expiry.
///
/// The service owns the HMAC keys derived from the signing secret. It is
/// constructed once from [`Config`](crate::config::Config) at startup and
/// injected by ownership wherever tokens are handled, so no call path reads
/// the environment and tests can supply their own secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a token for `user_id`, expiring in 72 hours.
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let expiration = Utc::now()
            .checked_add_signed(Duration::hours(TOKEN_TTL_HOURS))
            .expect("valid timestamp")
            .timestamp();

        let claims = Claims {
            user_id,
            exp: expiration,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("failed to sign token: {}", e)))
    }

    /// Verifies a token and returns the authenticated user id.
    ///
    /// Fails with a 401-class error when the signature does not validate,
    /// the header algorithm is anything but HS256 (rejecting "none" and
    /// asymmetric substitution), the claims are malformed, or the token has
    /// expired.
    pub fn verify(&self, token: &str) -> Result<i32, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))?;
        Ok(data.claims.user_id)
    }
}
