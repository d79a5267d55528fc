use crate::constants::MAX_ORIGIN_LENGTH;
use crate::trusted_origins::TrustedOrigins;
use thiserror::Error;

/// Construction-time configuration for [`CsrfPolicy`](crate::CsrfPolicy).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct CsrfOptions {
    pub trusted_origins: TrustedOrigins,
}

impl CsrfOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for origin in self.trusted_origins.iter() {
            validate_origin(origin)?;
        }
        Ok(())
    }
}

/// Errors produced when validating [`CsrfOptions`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("trusted origins cannot contain an empty entry")]
    EmptyTrustedOrigin,
    #[error("trusted origin '{0}' contains a wildcard; trusted origins are matched exactly")]
    TrustedOriginWildcard(String),
    #[error("trusted origin '{0}' contains whitespace")]
    TrustedOriginWhitespace(String),
    #[error("trusted origin '{0}' must start with a scheme such as 'https://'")]
    TrustedOriginMissingScheme(String),
    #[error(
        "trusted origin '{0}' must not include a path, query or fragment; browsers never send one in the Origin header"
    )]
    TrustedOriginHasPath(String),
    #[error("trusted origin length {length} exceeds maximum allowed {max}")]
    TrustedOriginTooLong { length: usize, max: usize },
}

fn validate_origin(origin: &str) -> Result<(), ValidationError> {
    if origin.is_empty() {
        return Err(ValidationError::EmptyTrustedOrigin);
    }
    if origin.len() > MAX_ORIGIN_LENGTH {
        return Err(ValidationError::TrustedOriginTooLong {
            length: origin.len(),
            max: MAX_ORIGIN_LENGTH,
        });
    }
    if origin.chars().any(char::is_whitespace) {
        return Err(ValidationError::TrustedOriginWhitespace(origin.to_string()));
    }
    if origin.contains('*') {
        return Err(ValidationError::TrustedOriginWildcard(origin.to_string()));
    }

    let Some((scheme, authority)) = origin.split_once("://") else {
        return Err(ValidationError::TrustedOriginMissingScheme(
            origin.to_string(),
        ));
    };
    if scheme.is_empty() || authority.is_empty() {
        return Err(ValidationError::TrustedOriginMissingScheme(
            origin.to_string(),
        ));
    }
    if authority.contains(['/', '?', '#']) {
        return Err(ValidationError::TrustedOriginHasPath(origin.to_string()));
    }

    Ok(())
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
