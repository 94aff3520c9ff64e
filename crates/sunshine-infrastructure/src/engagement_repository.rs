//! Durable engagement state storage.
//!
//! The conversion popup flag is one-shot per installation, so it lives in
//! a TOML file that survives browser restarts, separate from the
//! session-scoped identity file.

use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;
use sunshine_core::engagement::{EngagementRepository, EngagementState};
use sunshine_core::error::Result;
use tokio::sync::Mutex;

/// TOML-file-backed engagement store.
pub struct TomlEngagementRepository {
    path: PathBuf,
    cache: Mutex<EngagementState>,
}

impl TomlEngagementRepository {
    /// Creates a repository backed by `path`, loading existing state.
    /// A missing or malformed file yields the default state.
    pub fn new(path: PathBuf) -> Self {
        let cache = match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<EngagementState>(&content) {
                Ok(state) => state,
                Err(err) => {
                    tracing::warn!("discarding malformed engagement file: {}", err);
                    EngagementState::default()
                }
            },
            Err(_) => EngagementState::default(),
        };

        Self {
            path,
            cache: Mutex::new(cache),
        }
    }

    fn write_to_disk(&self, state: EngagementState) {
        let serialized = match toml::to_string_pretty(&state) {
            Ok(serialized) => serialized,
            Err(err) => {
                tracing::warn!("failed to serialize engagement state: {}", err);
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!("engagement storage unavailable: {}", err);
                return;
            }
        }

        if let Err(err) = fs::write(&self.path, serialized) {
            tracing::warn!("engagement storage unavailable: {}", err);
        }
    }
}

#[async_trait]
impl EngagementRepository for TomlEngagementRepository {
    async fn get(&self) -> EngagementState {
        *self.cache.lock().await
    }

    async fn mark_popup_shown(&self) -> Result<()> {
        let mut cache = self.cache.lock().await;
        cache.popup_shown = true;
        let state = *cache;
        drop(cache);

        self.write_to_disk(state);
        Ok(())
    }
}
