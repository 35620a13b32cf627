use bcrypt::{hash, verify, BcryptError};

/// bcrypt cost used for stored passwords.
pub const BCRYPT_COST: u32 = 8;

/// Hash a password using bcrypt
///
/// # Example
/// ```
/// use edu_utils::hash::{bcrypt_check, bcrypt_hash};
///
/// let hashed = bcrypt_hash("my_password1").unwrap();
/// assert!(bcrypt_check("my_password1", &hashed));
/// ```
pub fn bcrypt_hash(password: &str) -> Result<String, BcryptError> {
    hash(password.as_bytes(), BCRYPT_COST)
}

/// Compare a plaintext password against a bcrypt hash.
///
/// A malformed hash counts as a mismatch.
pub fn bcrypt_check(password: &str, hash: &str) -> bool {
    verify(password.as_bytes(), hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_hash_and_check() {
        let password = "test_password1";
        let hash = bcrypt_hash(password).unwrap();

        assert_ne!(hash, password);
        assert!(bcrypt_check(password, &hash));
        assert!(!bcrypt_check("wrong_password1", &hash));
    }

    #[test]
    fn malformed_hash_never_matches() {
        assert!(!bcrypt_check("anything", "not-a-bcrypt-hash"));
    }
}
