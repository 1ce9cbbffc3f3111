//! Local Authenticator
//! Mission: Verify identifier + secret against the credential store

use crate::auth::errors::AuthError;
use crate::auth::models::User;
use crate::auth::password::PasswordHasher;
use crate::auth::user_store::UserStore;
use std::sync::Arc;
use tracing::debug;

/// Single-attempt credential check: look up the user, verify the secret
/// against the stored hash. No retries, no rate limiting.
///
/// `UserNotFound` and `BadCredentials` stay distinct here for server-side
/// logging; the HTTP boundary collapses them into one generic rejection.
#[derive(Clone)]
pub struct Authenticator {
    store: Arc<UserStore>,
    hasher: PasswordHasher,
}

impl Authenticator {
    pub fn new(store: Arc<UserStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    pub fn authenticate(&self, username: &str, secret: &str) -> Result<User, AuthError> {
        let user = self
            .store
            .find_by_username(username)
            .map_err(AuthError::Store)?
            .ok_or(AuthError::UserNotFound)?;

        let valid = self
            .hasher
            .verify(secret, &user.password_hash)
            .map_err(AuthError::Store)?;

        if !valid {
            return Err(AuthError::BadCredentials);
        }

        debug!("verified credentials for {}", user.username);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_authenticator() -> (Authenticator, Arc<UserStore>, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap();
        let store = Arc::new(UserStore::new(db_path).unwrap());
        let hasher = PasswordHasher::new(4);

        let hash = hasher.hash("hunter2").unwrap();
        store.create_user("a@x.com", "A", &hash).unwrap();

        (Authenticator::new(store.clone(), hasher), store, temp_file)
    }

    #[test]
    fn test_correct_credentials_succeed() {
        let (auth, _store, _temp) = create_test_authenticator();

        let user = auth.authenticate("a@x.com", "hunter2").unwrap();
        assert_eq!(user.username, "a@x.com");
    }

    #[test]
    fn test_wrong_password_fails() {
        let (auth, _store, _temp) = create_test_authenticator();

        let err = auth.authenticate("a@x.com", "wrong").unwrap_err();
        assert!(matches!(err, AuthError::BadCredentials));
    }

    #[test]
    fn test_unknown_user_fails() {
        let (auth, _store, _temp) = create_test_authenticator();

        let err = auth.authenticate("nobody@x.com", "hunter2").unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));
    }
}
