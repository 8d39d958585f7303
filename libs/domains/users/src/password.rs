//! Argon2id password hashing.
//!
//! Hashing is deliberately slow, so the async entry points move the work to
//! tokio's blocking pool.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{UserError, UserResult};

/// Hash `password` into a PHC string with a fresh random salt.
pub async fn hash_password(password: String) -> UserResult<String> {
    tokio::task::spawn_blocking(move || hash_blocking(&password))
        .await
        .map_err(|e| UserError::PasswordHash(e.to_string()))?
}

/// Check `password` against a stored PHC string.
///
/// A stored value that is not a parsable hash never verifies.
pub async fn verify_password(password: String, stored_hash: String) -> UserResult<bool> {
    tokio::task::spawn_blocking(move || verify_blocking(&password, &stored_hash))
        .await
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

fn hash_blocking(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

fn verify_blocking(password: &str, stored_hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(stored_hash) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is not a valid PHC string");
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hash = hash_password("pw1".to_string()).await.unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("pw1".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("pw2".to_string(), hash).await.unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_blocking("same").unwrap();
        let second = hash_blocking("same").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        assert!(!verify_blocking("pw1", "pw1"));
        assert!(!verify_blocking("", ""));
    }
}
