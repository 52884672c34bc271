//! Input validation for configuration records.
//!
//! Validates secret names and repository targets. Secret values are passed
//! through untouched.

use crate::core::constants::RESERVED_SECRET_PREFIX;
use crate::core::domain::RepositoryTarget;
use crate::error::ConfigError;

/// Validate an Actions secret name.
///
/// Secret names must follow GitHub's rules:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot start with the reserved `GITHUB_` prefix (case-insensitive)
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the name is invalid.
pub fn validate_secret_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(invalid_name(name, "cannot be empty".to_string()));
    }

    if let Some(first_char) = name.chars().next() {
        if first_char.is_ascii_digit() {
            return Err(invalid_name(name, "cannot start with a digit".to_string()));
        }
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(invalid_name(
                name,
                format!(
                    "invalid character '{}' at position {}. Only A-Z, a-z, 0-9, and underscore are allowed",
                    ch,
                    i + 1
                ),
            ));
        }
    }

    if name.to_ascii_uppercase().starts_with(RESERVED_SECRET_PREFIX) {
        return Err(invalid_name(
            name,
            format!("the {} prefix is reserved", RESERVED_SECRET_PREFIX),
        ));
    }

    Ok(())
}

/// Validate a repository target.
///
/// Owner and name must be non-empty and must not contain `/` or whitespace,
/// since both end up as URL path segments.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if either part is malformed.
pub fn validate_repository(target: &RepositoryTarget) -> Result<(), ConfigError> {
    for (part, value) in [("owner", target.owner()), ("name", target.name())] {
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "repository",
                reason: format!("{} cannot be empty", part),
            });
        }
        if value.contains('/') || value.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                field: "repository",
                reason: format!("invalid {} '{}'", part, value),
            });
        }
    }

    Ok(())
}

fn invalid_name(name: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: "secret name",
        reason: format!("'{}' {}", name, reason),
    }
}
