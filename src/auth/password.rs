use crate::error::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};

/// Hashes a plaintext password with bcrypt. A fresh salt is generated per
/// call, so two hashes of the same input differ. Hashing failure is an
/// internal error and fatal to the calling operation.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST).map_err(AppError::from)
}

/// Checks a plaintext password against a stored digest. Returns `false` on
/// mismatch and on malformed digests alike; the caller cannot tell the two
/// apart.
pub fn verify_password(password: &str, hashed_password: &str) -> bool {
    verify(password, hashed_password).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing_and_verification() {
        let password = "test_password123";
        let hashed = hash_password(password).unwrap();

        assert!(verify_password(password, &hashed));
        assert!(!verify_password("wrong_password", &hashed));
    }

    #[test]
    fn test_same_password_hashes_differ() {
        // Per-call salt: the digests must not be equal.
        let first = hash_password("repeatable").unwrap();
        let second = hash_password("repeatable").unwrap();
        assert_ne!(first, second);

        assert!(verify_password("repeatable", &first));
        assert!(verify_password("repeatable", &second));
    }

    #[test]
    fn test_verify_with_malformed_digest_fails() {
        assert!(!verify_password("test_password123", "invalidhashformat"));
        assert!(!verify_password("test_password123", ""));
    }
}
