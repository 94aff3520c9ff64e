//! Storage path management.
//!
//! The engine uses two storage scopes that must never be conflated: the
//! session-scoped identity file (the host clears the session directory
//! when the browser session ends) and the durable engagement file (which
//! survives restarts). Both resolve under one base directory that tests
//! override with a temp dir.

use std::path::PathBuf;
use sunshine_core::error::{Result, SunshineError};

const APP_DIR: &str = "sunshine";
const SESSION_DIR: &str = "session";
const IDENTITY_FILE: &str = "identity.toml";
const ENGAGEMENT_FILE: &str = "engagement.toml";

/// Resolves the files the infrastructure repositories read and write.
#[derive(Debug, Clone)]
pub struct SunshinePaths {
    root: Option<PathBuf>,
}

impl SunshinePaths {
    /// Creates a path resolver.
    ///
    /// With `root = None` the base directory is the platform config dir
    /// (e.g. `~/.config/sunshine`). Tests pass an explicit root.
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    fn base_dir(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or_else(|| SunshineError::config("cannot determine config directory")),
        }
    }

    /// Session-scoped identity file. The host wipes the enclosing
    /// `session/` directory at browser-session end.
    pub fn identity_file(&self) -> Result<PathBuf> {
        Ok(self.base_dir()?.join(SESSION_DIR).join(IDENTITY_FILE))
    }

    /// Durable engagement file; survives restarts.
    pub fn engagement_file(&self) -> Result<PathBuf> {
        Ok(self.base_dir()?.join(ENGAGEMENT_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scopes_resolve_to_distinct_files() {
        let paths = SunshinePaths::new(Some(PathBuf::from("/tmp/sunshine-test")));
        let identity = paths.identity_file().unwrap();
        let engagement = paths.engagement_file().unwrap();

        assert_ne!(identity, engagement);
        assert!(identity.starts_with("/tmp/sunshine-test/session"));
        assert!(engagement.starts_with("/tmp/sunshine-test"));
        assert!(!engagement.starts_with("/tmp/sunshine-test/session"));
    }
}
