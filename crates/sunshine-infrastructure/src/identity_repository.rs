//! Session identity storage implementations.
//!
//! The file-backed repository keeps an in-memory cache in front of a TOML
//! file so identity survives page reloads within one browser session.
//! When the file cannot be read or written the repository silently
//! degrades to the in-memory cache: the visitor loses persistence on
//! reload, never the conversation.

use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;
use sunshine_core::error::Result;
use sunshine_core::session::{IdentityRepository, SessionIdentity};
use tokio::sync::Mutex;

/// File-backed identity store with silent in-memory degradation.
pub struct FileIdentityRepository {
    path: PathBuf,
    cache: Mutex<Option<SessionIdentity>>,
}

impl FileIdentityRepository {
    /// Creates a repository backed by `path`, loading any identity stored
    /// there earlier in the session. An unreadable or malformed file is
    /// treated as an empty session.
    pub fn new(path: PathBuf) -> Self {
        let cache = match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<SessionIdentity>(&content) {
                Ok(identity) => Some(identity),
                Err(err) => {
                    tracing::warn!("discarding malformed identity file: {}", err);
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            path,
            cache: Mutex::new(cache),
        }
    }

    fn write_to_disk(&self, identity: &SessionIdentity) {
        let serialized = match toml::to_string_pretty(identity) {
            Ok(serialized) => serialized,
            Err(err) => {
                tracing::warn!("failed to serialize identity, keeping it in memory: {}", err);
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!("identity storage unavailable, degrading to memory: {}", err);
                return;
            }
        }

        if let Err(err) = fs::write(&self.path, serialized) {
            tracing::warn!("identity storage unavailable, degrading to memory: {}", err);
        }
    }
}

#[async_trait]
impl IdentityRepository for FileIdentityRepository {
    async fn get(&self) -> Option<SessionIdentity> {
        self.cache.lock().await.clone()
    }

    async fn save(&self, identity: &SessionIdentity) -> Result<()> {
        *self.cache.lock().await = Some(identity.clone());
        self.write_to_disk(identity);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.cache.lock().await = None;
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("failed to remove identity file: {}", err);
            }
        }
        Ok(())
    }
}

/// Purely in-memory identity store.
///
/// The degraded mode made explicit: used by hosts without writable
/// storage, and convenient in tests.
#[derive(Default)]
pub struct InMemoryIdentityRepository {
    identity: Mutex<Option<SessionIdentity>>,
}

impl InMemoryIdentityRepository {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn get(&self) -> Option<SessionIdentity> {
        self.identity.lock().await.clone()
    }

    async fn save(&self, identity: &SessionIdentity) -> Result<()> {
        *self.identity.lock().await = Some(identity.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.identity.lock().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunshine_core::language::Language;

    #[tokio::test]
    async fn test_save_and_reload_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session").join("identity.toml");

        let mut identity = SessionIdentity::new();
        identity.display_name = Some("Lisa".to_string());
        identity.language = Language::Spanish;

        let repository = FileIdentityRepository::new(path.clone());
        repository.save(&identity).await.unwrap();

        // A new instance simulates a page reload within the session.
        let reloaded = FileIdentityRepository::new(path);
        let restored = reloaded.get().await.expect("identity should survive reload");
        assert_eq!(restored.display_name, Some("Lisa".to_string()));
        assert_eq!(restored.language, Language::Spanish);
        assert_eq!(restored.visitor_id, identity.visitor_id);
    }

    #[tokio::test]
    async fn test_clear_removes_identity_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("identity.toml");

        let repository = FileIdentityRepository::new(path.clone());
        repository.save(&SessionIdentity::new()).await.unwrap();
        assert!(path.exists());

        repository.clear().await.unwrap();
        assert!(repository.get().await.is_none());
        assert!(!path.exists());

        let reloaded = FileIdentityRepository::new(path);
        assert!(reloaded.get().await.is_none());
    }

    #[tokio::test]
    async fn test_unwritable_storage_degrades_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        // The parent "blocker" is a file, so creating it as a directory fails.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "occupied").unwrap();
        let path = blocker.join("identity.toml");

        let repository = FileIdentityRepository::new(path);
        let identity = SessionIdentity::new();

        // Saving must not error; the identity stays available in memory.
        repository.save(&identity).await.unwrap();
        let cached = repository.get().await.expect("in-memory identity expected");
        assert_eq!(cached.visitor_id, identity.visitor_id);
    }

    #[tokio::test]
    async fn test_malformed_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("identity.toml");
        fs::write(&path, "not valid toml {{{{").unwrap();

        let repository = FileIdentityRepository::new(path);
        assert!(repository.get().await.is_none());
    }

    #[tokio::test]
    async fn test_in_memory_repository_round_trip() {
        let repository = InMemoryIdentityRepository::new();
        assert!(repository.get().await.is_none());

        let identity = SessionIdentity::new();
        repository.save(&identity).await.unwrap();
        assert_eq!(
            repository.get().await.map(|i| i.visitor_id),
            Some(identity.visitor_id)
        );

        repository.clear().await.unwrap();
        assert!(repository.get().await.is_none());
    }
}
