//! Core library components.
//!
//! This module contains the reusable logic for loading configuration,
//! sealing secrets, and publishing them through the GitHub API.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod github;
pub mod publish;
pub mod validation;
