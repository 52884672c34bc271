//! Repository target.

use serde::Deserialize;

/// A destination repository, identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct RepositoryTarget {
    owner: String,
    name: String,
}

impl RepositoryTarget {
    /// Create a new repository target
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Owning user or organization
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for RepositoryTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
