//! User Storage
//! Mission: Persist user accounts with SQLite

use crate::auth::models::User;
use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection};
use tracing::info;
use uuid::Uuid;

/// User storage with SQLite backend
pub struct UserStore {
    db_path: String,
}

impl UserStore {
    /// Create a new user store and initialize database
    pub fn new(db_path: &str) -> Result<Self> {
        let store = Self {
            db_path: db_path.to_string(),
        };
        store.init_db()?;
        Ok(store)
    }

    /// Initialize database schema
    fn init_db(&self) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                display_name TEXT NOT NULL,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Get user by username
    pub fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = Connection::open(&self.db_path)?;

        let mut stmt = conn.prepare(
            "SELECT id, username, display_name, password_hash, created_at
             FROM users WHERE username = ?1",
        )?;

        let user_result = stmt.query_row(params![username], |row| {
            Ok(User {
                id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
                username: row.get(1)?,
                display_name: row.get(2)?,
                password_hash: row.get(3)?,
                created_at: row.get(4)?,
            })
        });

        match user_result {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Create a new user. The caller supplies an already-hashed password;
    /// plaintext never reaches the store. Username uniqueness is enforced by
    /// the schema.
    pub fn create_user(
        &self,
        username: &str,
        display_name: &str,
        password_hash: &str,
    ) -> Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            display_name: display_name.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now().to_rfc3339(),
        };

        let conn = Connection::open(&self.db_path)?;
        conn.execute(
            "INSERT INTO users (id, username, display_name, password_hash, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                user.id.to_string(),
                user.username,
                user.display_name,
                user.password_hash,
                user.created_at,
            ],
        )
        .context("Failed to insert user")?;

        info!("Created user: {}", user.username);

        Ok(user)
    }

    /// Total number of registered users
    pub fn count_users(&self) -> Result<i64> {
        let conn = Connection::open(&self.db_path)?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .context("Failed to count users")?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_store() -> (UserStore, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap();
        let store = UserStore::new(db_path).unwrap();
        (store, temp_file)
    }

    #[test]
    fn test_create_and_retrieve_user() {
        let (store, _temp) = create_test_store();

        let created = store.create_user("a@x.com", "A", "hashed-secret").unwrap();
        assert_eq!(created.username, "a@x.com");

        let retrieved = store.find_by_username("a@x.com").unwrap();
        assert!(retrieved.is_some());

        let retrieved = retrieved.unwrap();
        assert_eq!(retrieved.id, created.id);
        assert_eq!(retrieved.display_name, "A");
        assert_eq!(retrieved.password_hash, "hashed-secret");
    }

    #[test]
    fn test_unknown_username_is_none() {
        let (store, _temp) = create_test_store();
        assert!(store.find_by_username("nobody@x.com").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_username_rejected_by_schema() {
        let (store, _temp) = create_test_store();

        store.create_user("a@x.com", "A", "hash1").unwrap();
        assert!(store.create_user("a@x.com", "B", "hash2").is_err());

        // Exactly one row survived the collision.
        assert_eq!(store.count_users().unwrap(), 1);
    }
}
