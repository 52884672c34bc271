//! Actor credential.

use std::fmt;

use zeroize::Zeroizing;

/// The credential used to authenticate against the GitHub API.
///
/// The token is held in zeroizing storage and never shows up in `Debug` output.
#[derive(Clone)]
pub struct Actor {
    token: Zeroizing<String>,
}

impl Actor {
    /// Create an actor from a bearer token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Zeroizing::new(token.into()),
        }
    }

    /// Bearer token
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor").field("token", &"<redacted>").finish()
    }
}
