//! Errors raised while constructing or resolving GraphQL objects

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Failure to build a resolver from the arguments it was given
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// A mandatory argument was empty or whitespace only
    #[error("{argument} is required")]
    ArgumentRequired { argument: &'static str },

    /// An argument was present but outside its accepted range
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

impl ResolverError {
    pub fn required(argument: &'static str) -> Self {
        Self::ArgumentRequired { argument }
    }

    pub fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Error code exposed in the GraphQL error extensions
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ArgumentRequired { .. } => "ARGUMENT_REQUIRED",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }

    /// Name of the offending argument
    pub fn argument(&self) -> &'static str {
        match self {
            Self::ArgumentRequired { argument } | Self::InvalidArgument { argument, .. } => {
                argument
            }
        }
    }
}

impl ErrorExtensions for ResolverError {
    fn extend(&self) -> async_graphql::Error {
        tracing::debug!(
            code = self.error_code(),
            argument = self.argument(),
            error = %self,
            "Rejected resolver argument"
        );

        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.error_code());
            e.set("argument", self.argument());
        })
    }
}

/// Result type for resolver construction
pub type ResolverResult<T> = Result<T, ResolverError>;

/// Fail with [`ResolverError::ArgumentRequired`] when `value` is blank
pub fn require_non_blank(argument: &'static str, value: &str) -> ResolverResult<()> {
    if value.trim().is_empty() {
        Err(ResolverError::required(argument))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message() {
        let err = ResolverError::required("tenantId");
        assert_eq!(err.to_string(), "tenantId is required");
        assert_eq!(err.error_code(), "ARGUMENT_REQUIRED");
    }

    #[test]
    fn test_invalid_message() {
        let err = ResolverError::invalid("first", "must not be negative");
        assert_eq!(
            err.to_string(),
            "invalid argument 'first': must not be negative"
        );
        assert_eq!(err.argument(), "first");
    }

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("cursor", "abc").is_ok());
        assert_eq!(
            require_non_blank("cursor", " \t "),
            Err(ResolverError::required("cursor"))
        );
    }

    #[test]
    fn test_extensions_carry_code() {
        let err = ResolverError::required("userId").extend();
        let extensions = err.extensions.expect("extensions are set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("ARGUMENT_REQUIRED"))
        );
        assert_eq!(
            extensions.get("argument"),
            Some(&async_graphql::Value::from("userId"))
        );
    }
}
