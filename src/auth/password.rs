//! Password Hashing
//! Mission: One-way hash and verify with a configurable work factor

use anyhow::{Context, Result};
use bcrypt::{hash, verify, DEFAULT_COST};

/// Bcrypt-backed hasher. The salt is embedded in the output, so hashing the
/// same secret twice yields different strings that both verify.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, secret: &str) -> Result<String> {
        hash(secret, self.cost).context("Failed to hash password")
    }

    /// Mismatch is a normal `Ok(false)`; only a malformed stored hash is an
    /// error.
    pub fn verify(&self, secret: &str, hashed: &str) -> Result<bool> {
        verify(secret, hashed).context("Failed to verify password")
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the test suite fast.
    fn test_hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = test_hasher();
        let hashed = hasher.hash("hunter2").unwrap();

        assert!(hasher.verify("hunter2", &hashed).unwrap());
        assert!(!hasher.verify("hunter3", &hashed).unwrap());
    }

    #[test]
    fn test_hash_is_self_salted() {
        let hasher = test_hasher();
        let a = hasher.hash("hunter2").unwrap();
        let b = hasher.hash("hunter2").unwrap();

        // Same input, different salt, different output; both verify.
        assert_ne!(a, b);
        assert!(hasher.verify("hunter2", &a).unwrap());
        assert!(hasher.verify("hunter2", &b).unwrap());
    }

    #[test]
    fn test_malformed_stored_hash_is_error() {
        let hasher = test_hasher();
        assert!(hasher.verify("hunter2", "not-a-bcrypt-hash").is_err());
    }
}
