//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check the CORS policy is expressible (scheme-qualified prefixes)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: HostConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::HostConfig;

/// A single semantic validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("cors origin prefix '{0}' must start with http:// or https://")]
    UnqualifiedOriginPrefix(String),

    #[error("cors policy must allow at least one origin prefix")]
    NoOriginPrefixes,

    #[error("identity cookie name must not be empty")]
    EmptyCookieName,

    #[error("asset root for '{0}' must not be empty")]
    EmptyAssetRoot(&'static str),
}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &HostConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.cors.allowed_origin_prefixes.is_empty() {
        errors.push(ValidationError::NoOriginPrefixes);
    }
    for prefix in &config.cors.allowed_origin_prefixes {
        if !prefix.starts_with("http://") && !prefix.starts_with("https://") {
            errors.push(ValidationError::UnqualifiedOriginPrefix(prefix.clone()));
        }
    }

    if config.auth.cookie_name.is_empty() {
        errors.push(ValidationError::EmptyCookieName);
    }

    for (name, dir) in [
        ("root", &config.assets.root_dir),
        ("subdir", &config.assets.subdir_dir),
        ("prerendered", &config.assets.prerendered_dir),
    ] {
        if dir.is_empty() {
            errors.push(ValidationError::EmptyAssetRoot(name));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&HostConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = HostConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.cors.allowed_origin_prefixes = vec!["localhost:".into()];
        config.auth.cookie_name = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_empty_origin_list_rejected() {
        let mut config = HostConfig::default();
        config.cors.allowed_origin_prefixes.clear();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::NoOriginPrefixes));
    }
}
