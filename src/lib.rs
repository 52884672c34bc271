//! Reposeal - Seal and publish GitHub Actions secrets across many repositories.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── publish       # Seal and upload secrets
//! │   ├── check         # Validate configuration offline
//! │   ├── output        # Console output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # JSON asset loading and runtime settings
//!     ├── cipher/       # Sealing backends
//!     │   ├── mod       # Cipher trait
//!     │   └── sealed_box
//!     ├── domain/       # Actor, targets, keys, secrets
//!     ├── github/       # Key and upload clients
//!     ├── publish/      # Per-repository pipeline and reports
//!     └── validation    # Secret name and repository checks
//! ```
//!
//! # Features
//!
//! - libsodium-compatible sealed boxes, as required by the Actions API
//! - Fresh public key per repository per run
//! - Concurrent, failure-isolated publishing with a per-secret report

pub mod cli;
pub mod core;
pub mod error;
