//! User store: repository interface plus in-memory and JSON-file backends.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::user::UserRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access user store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("user store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown user '{0}'")]
    UnknownUser(String),

    #[error("user '{0}' already exists")]
    DuplicateUser(String),

    #[error("user store lock poisoned")]
    Poisoned,
}

/// Flat list of user records, read and replaced wholesale.
pub trait UserStore: Send + Sync {
    fn load_all(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// Store every record, replacing the previous contents.
    fn save_all(&self, records: &[UserRecord]) -> Result<(), StoreError>;

    fn find(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|r| r.username == username))
    }

    /// Append a new record. Usernames are unique.
    fn insert(&self, record: UserRecord) -> Result<(), StoreError> {
        let mut records = self.load_all()?;
        if records.iter().any(|r| r.username == record.username) {
            return Err(StoreError::DuplicateUser(record.username));
        }
        records.push(record);
        self.save_all(&records)
    }

    /// Replace the record with the same username.
    fn replace(&self, record: UserRecord) -> Result<(), StoreError> {
        let mut records = self.load_all()?;
        let Some(slot) = records.iter_mut().find(|r| r.username == record.username) else {
            return Err(StoreError::UnknownUser(record.username));
        };
        *slot = record;
        self.save_all(&records)
    }
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn load_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        (**self).load_all()
    }

    fn save_all(&self, records: &[UserRecord]) -> Result<(), StoreError> {
        (**self).save_all(records)
    }

    fn find(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        (**self).find(username)
    }

    fn insert(&self, record: UserRecord) -> Result<(), StoreError> {
        (**self).insert(record)
    }

    fn replace(&self, record: UserRecord) -> Result<(), StoreError> {
        (**self).replace(record)
    }
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            inner: RwLock::new(records),
        }
    }
}

impl UserStore for InMemoryUserStore {
    fn load_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        let records = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.clone())
    }

    fn save_all(&self, records: &[UserRecord]) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        *inner = records.to_vec();
        Ok(())
    }
}

/// JSON array of user records on disk (`users.json`).
///
/// A missing file reads as an empty store; the first write creates it.
#[derive(Debug, Clone)]
pub struct JsonFileUserStore {
    path: PathBuf,
}

impl JsonFileUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl UserStore for JsonFileUserStore {
    fn load_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "user store missing; starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn save_all(&self, records: &[UserRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "user store written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::Money;

    fn ramanathan() -> UserRecord {
        UserRecord::new("Ramanathan", "Notaproblem23*").with_wallet(Money::from_major(100))
    }

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("shopfront-users-{}.json", uuid::Uuid::now_v7()))
    }

    #[test]
    fn find_returns_the_matching_record() {
        let store = InMemoryUserStore::with_records(vec![ramanathan()]);
        assert_eq!(store.find("Ramanathan").unwrap(), Some(ramanathan()));
        assert_eq!(store.find("Nobody").unwrap(), None);
    }

    #[test]
    fn insert_rejects_duplicates() {
        let store = InMemoryUserStore::with_records(vec![ramanathan()]);
        let err = store.insert(ramanathan()).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateUser(name) if name == "Ramanathan"));
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn replace_swaps_the_record_in_place() {
        let store = InMemoryUserStore::with_records(vec![
            UserRecord::new("First", "x"),
            ramanathan(),
            UserRecord::new("Last", "y"),
        ]);
        let mut updated = ramanathan();
        updated.email = "mail@mail.com".into();
        store.replace(updated.clone()).unwrap();

        let records = store.load_all().unwrap();
        assert_eq!(records[1], updated);
        assert_eq!(records[0].username, "First");
        assert_eq!(records[2].username, "Last");
    }

    #[test]
    fn replace_unknown_user_fails() {
        let store = InMemoryUserStore::new();
        assert!(matches!(
            store.replace(ramanathan()),
            Err(StoreError::UnknownUser(_))
        ));
    }

    #[test]
    fn json_store_round_trips_through_disk() {
        let path = temp_path();
        let store = JsonFileUserStore::new(&path);
        assert!(store.load_all().unwrap().is_empty());

        store.insert(ramanathan()).unwrap();
        store.insert(UserRecord::new("NewUser", "CorrectPassword!")).unwrap();

        let reopened = JsonFileUserStore::new(&path);
        let records = reopened.load_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], ramanathan());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn json_store_rejects_garbage() {
        let path = temp_path();
        std::fs::write(&path, "not json").unwrap();
        let store = JsonFileUserStore::new(&path);
        assert!(matches!(store.load_all(), Err(StoreError::Json(_))));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn shared_store_behind_arc() {
        let store = Arc::new(InMemoryUserStore::new());
        let handle = store.clone();
        handle.insert(ramanathan()).unwrap();
        assert!(store.find("Ramanathan").unwrap().is_some());
    }
}
