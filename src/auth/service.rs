use std::sync::Arc;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::TokenService;
use crate::auth::AuthResponse;
use crate::error::AppError;
use crate::repository::UserStore;

/// Orchestrates registration and login over the injected user store.
///
/// The store is a capability trait, so tests substitute an in-memory fake;
/// the token service is owned and carries the signing secret.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Creates an account for `username`.
    ///
    /// The `user_exists` pre-check is a fast path only; the storage unique
    /// constraint stays authoritative against a concurrent duplicate insert,
    /// and a constraint violation surfaces as `DuplicateUser` too. The
    /// plaintext is dropped after hashing and never stored or logged.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AppError> {
        if self.users.user_exists(username).await? {
            return Err(AppError::DuplicateUser);
        }

        let password_hash = hash_password(password)?;
        self.users.create_user(username, &password_hash).await?;
        Ok(())
    }

    /// Authenticates a user and issues a token scoped to their id.
    ///
    /// Unknown username and wrong password are distinct errors here; both
    /// render the same generic 401 body at the HTTP boundary.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, AppError> {
        let user = match self.users.get_user_by_username(username).await? {
            Some(user) => user,
            None => return Err(AppError::UserNotFound),
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id)?;
        Ok(AuthResponse {
            token,
            user_id: user.id,
        })
    }
}
