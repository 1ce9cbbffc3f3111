//! List Storage
//! Mission: Persist each user's saved venues with SQLite

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved venue on a user's list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItem {
    pub id: Uuid,
    pub username: String,
    pub venue_id: String,
    pub name: String,
    pub note: Option<String>,
    pub created_at: String,
}

/// List storage with SQLite backend
pub struct ListStore {
    db_path: String,
}

impl ListStore {
    pub fn new(db_path: &str) -> Result<Self> {
        let store = Self {
            db_path: db_path.to_string(),
        };
        store.init_db()?;
        Ok(store)
    }

    fn init_db(&self) -> Result<()> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS list_items (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL,
                venue_id TEXT NOT NULL,
                name TEXT NOT NULL,
                note TEXT,
                created_at TEXT NOT NULL
            )",
            [],
        )?;
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_list_items_username ON list_items(username)",
            [],
        )?;

        Ok(())
    }

    /// All items on one user's list, newest first
    pub fn items_for_user(&self, username: &str) -> Result<Vec<ListItem>> {
        let conn = Connection::open(&self.db_path)?;

        let mut stmt = conn.prepare(
            "SELECT id, username, venue_id, name, note, created_at
             FROM list_items WHERE username = ?1
             ORDER BY created_at DESC",
        )?;

        let items = stmt
            .query_map(params![username], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(items)
    }

    pub fn add_item(
        &self,
        username: &str,
        venue_id: &str,
        name: &str,
        note: Option<&str>,
    ) -> Result<ListItem> {
        let item = ListItem {
            id: Uuid::new_v4(),
            username: username.to_string(),
            venue_id: venue_id.to_string(),
            name: name.to_string(),
            note: note.map(str::to_string),
            created_at: Utc::now().to_rfc3339(),
        };

        let conn = Connection::open(&self.db_path)?;
        conn.execute(
            "INSERT INTO list_items (id, username, venue_id, name, note, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                item.id.to_string(),
                item.username,
                item.venue_id,
                item.name,
                item.note,
                item.created_at,
            ],
        )
        .context("Failed to insert list item")?;

        Ok(item)
    }

    /// Update name/note of one item. Scoped by owner: another user's item id
    /// behaves exactly like a missing one.
    pub fn update_item(
        &self,
        username: &str,
        id: &Uuid,
        name: Option<&str>,
        note: Option<&str>,
    ) -> Result<Option<ListItem>> {
        let conn = Connection::open(&self.db_path)?;

        conn.execute(
            "UPDATE list_items
             SET name = COALESCE(?3, name), note = COALESCE(?4, note)
             WHERE id = ?1 AND username = ?2",
            params![id.to_string(), username, name, note],
        )
        .context("Failed to update list item")?;

        let mut stmt = conn.prepare(
            "SELECT id, username, venue_id, name, note, created_at
             FROM list_items WHERE id = ?1 AND username = ?2",
        )?;
        let item = stmt
            .query_row(params![id.to_string(), username], Self::map_row)
            .optional()?;

        Ok(item)
    }

    /// Remove one item; returns false when it did not exist for this user.
    pub fn remove_item(&self, username: &str, id: &Uuid) -> Result<bool> {
        let conn = Connection::open(&self.db_path)?;

        let rows_affected = conn.execute(
            "DELETE FROM list_items WHERE id = ?1 AND username = ?2",
            params![id.to_string(), username],
        )?;

        Ok(rows_affected > 0)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ListItem> {
        Ok(ListItem {
            id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
            username: row.get(1)?,
            venue_id: row.get(2)?,
            name: row.get(3)?,
            note: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_store() -> (ListStore, NamedTempFile) {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap();
        let store = ListStore::new(db_path).unwrap();
        (store, temp_file)
    }

    #[test]
    fn test_add_and_list_items() {
        let (store, _temp) = create_test_store();

        store
            .add_item("a@x.com", "v1", "Taco Stand", None)
            .unwrap();
        store
            .add_item("a@x.com", "v2", "Noodle Bar", Some("try the broth"))
            .unwrap();
        store.add_item("b@x.com", "v3", "Elsewhere", None).unwrap();

        let items = store.items_for_user("a@x.com").unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.username == "a@x.com"));
    }

    #[test]
    fn test_update_item_scoped_to_owner() {
        let (store, _temp) = create_test_store();

        let item = store
            .add_item("a@x.com", "v1", "Taco Stand", None)
            .unwrap();

        // Wrong owner sees nothing.
        let missing = store
            .update_item("b@x.com", &item.id, Some("Stolen"), None)
            .unwrap();
        assert!(missing.is_none());

        let updated = store
            .update_item("a@x.com", &item.id, Some("Taco Palace"), Some("great"))
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Taco Palace");
        assert_eq!(updated.note.as_deref(), Some("great"));
        assert_eq!(updated.venue_id, "v1");
    }

    #[test]
    fn test_remove_item() {
        let (store, _temp) = create_test_store();

        let item = store
            .add_item("a@x.com", "v1", "Taco Stand", None)
            .unwrap();

        assert!(!store.remove_item("b@x.com", &item.id).unwrap());
        assert!(store.remove_item("a@x.com", &item.id).unwrap());
        assert!(store.items_for_user("a@x.com").unwrap().is_empty());
    }
}
