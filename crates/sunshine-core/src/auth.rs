//! Authentication collaborator, read-only from the engine's perspective.

/// The currently signed-in marketplace user, as reported by the host app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Account id.
    pub id: String,
    /// Account display name, if the profile has one.
    pub display_name: Option<String>,
}

/// Exposes the host application's authentication state.
///
/// The engine never mutates authentication; it only reads the flag to
/// resolve auth-gated destinations and to annotate assistant requests.
pub trait AuthProvider: Send + Sync {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<AuthenticatedUser>;

    /// Convenience flag derived from [`Self::current_user`].
    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}
