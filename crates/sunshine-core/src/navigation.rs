//! Navigation collaborator.

/// The single navigation primitive the engine uses.
///
/// Both confirmed routes and direct quick-action routes go through this
/// same-tab primitive. Injected so tests can count calls.
pub trait Navigator: Send + Sync {
    /// Performs a same-tab navigation to an in-app path.
    fn navigate(&self, path: &str);
}
