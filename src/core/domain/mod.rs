//! Domain types.

mod actor;
mod key;
mod repository;
mod secret;

pub use actor::Actor;
pub use key::PublicKey;
pub use repository::RepositoryTarget;
pub use secret::{SealedSecret, SecretSpec};
