use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result};
use keyring::Entry;

use crate::models::User;

/// Keychain service name for keyring-backed entries
const SERVICE_NAME: &str = "huddle-client";

/// Key for the session token
pub const TOKEN_KEY: &str = "auth_token";

/// Key for the serialized cached user record
pub const USER_KEY: &str = "user_data";

/// Durable key-value storage for the session token and cached user.
///
/// The session layer only ever talks to this trait; which backing store
/// is used (OS keychain, plain files, in-process map) is the host's
/// choice at startup.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;

    /// Store the bearer token.
    fn save_token(&self, token: &str) -> Result<()> {
        self.set(TOKEN_KEY, token)
    }

    /// Retrieve the bearer token, if one is stored.
    fn token(&self) -> Result<Option<String>> {
        self.get(TOKEN_KEY)
    }

    /// Store the user record as JSON.
    fn save_user(&self, user: &User) -> Result<()> {
        let data = serde_json::to_string(user).context("Failed to serialize user record")?;
        self.set(USER_KEY, &data)
    }

    /// Retrieve and deserialize the cached user record.
    fn user(&self) -> Result<Option<User>> {
        match self.get(USER_KEY)? {
            Some(data) => {
                let user = serde_json::from_str(&data).context("Failed to parse user record")?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Persist a full credential record (token + user) after a
    /// successful login, signup, or verification.
    fn save_session(&self, token: &str, user: &User) -> Result<()> {
        self.save_token(token)?;
        self.save_user(user)
    }

    /// Delete both entries wholesale (logout). Both deletions are
    /// attempted even if the first fails, so logout scrubs as much as
    /// it can; the first failure is the one reported.
    fn clear(&self) -> Result<()> {
        let token = self.delete(TOKEN_KEY);
        let user = self.delete(USER_KEY);
        token.and(user)
    }
}

// Lets hosts pick a backing store at startup behind one type.
impl<T: CredentialStore + ?Sized> CredentialStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}

// Lets a host keep a handle to the store it handed the session manager.
impl<T: CredentialStore + ?Sized> CredentialStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}

/// Credential store backed by the OS keychain via `keyring`.
/// Used on native targets where a secure enclave is available.
pub struct KeyringStore;

impl KeyringStore {
    fn entry(key: &str) -> Result<Entry> {
        Entry::new(SERVICE_NAME, key).context("Failed to create keyring entry")
    }
}

impl CredentialStore for KeyringStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match Self::entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).context("Failed to read credential from keychain"),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::entry(key)?
            .set_password(value)
            .context("Failed to store credential in keychain")
    }

    fn delete(&self, key: &str) -> Result<()> {
        match Self::entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e).context("Failed to delete credential from keychain"),
        }
    }
}

/// Credential store backed by plain files in a data directory.
/// The fallback where no keychain exists (containers, web-style hosts).
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl CredentialStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        if path.exists() {
            let value = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read credential file {}", path.display()))?;
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        std::fs::write(self.path(key), value).context("Failed to write credential file")
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path(key);
        if path.exists() {
            std::fs::remove_file(&path).context("Failed to delete credential file")?;
        }
        Ok(())
    }
}

/// In-process credential store for tests and embedding hosts that
/// manage persistence themselves.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means another writer panicked; the map
    // itself is still usable.
    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            avatar: None,
            bio: Some("hi".to_string()),
            is_verified: false,
            created_at: "2025-04-17T09:21:44".to_string(),
        }
    }

    #[test]
    fn test_memory_store_user_round_trip() {
        let store = MemoryStore::new();
        let user = sample_user();

        store.save_user(&user).expect("save user");
        let loaded = store.user().expect("load user").expect("user present");
        assert_eq!(loaded, user);
    }

    #[test]
    fn test_clear_removes_both_entries() {
        let store = MemoryStore::new();
        store.save_session("tok-1", &sample_user()).expect("save session");

        store.clear().expect("clear");
        assert!(store.token().expect("read token").is_none());
        assert!(store.user().expect("read user").is_none());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("huddle-store-test-{}", std::process::id()));
        let store = FileStore::new(dir.clone());

        store.save_session("tok-abc", &sample_user()).expect("save session");
        assert_eq!(store.token().expect("read token").as_deref(), Some("tok-abc"));
        let loaded = store.user().expect("load user").expect("user present");
        assert_eq!(loaded.username, "jdoe");

        store.clear().expect("clear");
        assert!(store.token().expect("read token").is_none());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_missing_entries_read_as_none() {
        let store = MemoryStore::new();
        assert!(store.token().expect("read token").is_none());
        assert!(store.user().expect("read user").is_none());
        // Deleting something that was never stored is not an error
        store.clear().expect("clear empty store");
    }

    /// Store that refuses to delete the token entry only.
    struct StickyTokenStore(MemoryStore);

    impl CredentialStore for StickyTokenStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }
        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.0.set(key, value)
        }
        fn delete(&self, key: &str) -> Result<()> {
            if key == TOKEN_KEY {
                anyhow::bail!("keychain entry locked");
            }
            self.0.delete(key)
        }
    }

    #[test]
    fn test_clear_attempts_both_deletes_despite_first_failure() {
        let store = StickyTokenStore(MemoryStore::new());
        store.save_session("tok-1", &sample_user()).expect("save session");

        let err = store.clear().expect_err("token delete should fail");
        assert!(err.to_string().contains("keychain entry locked"));
        // The user record was still scrubbed
        assert!(store.user().expect("read user").is_none());
    }

    #[test]
    fn test_corrupt_user_record_is_an_error() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "not-json").expect("set raw value");
        assert!(store.user().is_err());
    }
}
