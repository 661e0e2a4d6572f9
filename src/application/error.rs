use std::error::Error as StdError;

use thiserror::Error;

use crate::{
    application::{authors::AuthorError, blog::BlogError},
    infra::error::InfraError,
    presentation::views::ViewError,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Blog(#[from] BlogError),
    #[error(transparent)]
    Author(#[from] AuthorError),
    #[error(transparent)]
    View(#[from] ViewError),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Messages for this error and every error in its source chain.
    pub fn chain(&self) -> Vec<String> {
        let mut messages = vec![self.to_string()];
        let mut current = self.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_transparent() {
        let err = AppError::from(BlogError::NotFound(4));
        assert_eq!(err.to_string(), "post `4` not found");
    }

    #[test]
    fn chain_walks_sources() {
        let io = std::io::Error::other("disk gone");
        let err = AppError::from(InfraError::from(io));
        assert_eq!(err.chain(), ["io error: disk gone", "disk gone"]);
    }

    #[test]
    fn configuration_failures_keep_their_cause() {
        let err = AppError::from(InfraError::from(crate::config::LoadError::Invalid {
            key: "content.empty_state",
            reason: "must not be blank".to_string(),
        }));
        assert_eq!(
            err.chain(),
            [
                "configuration error: invalid configuration for `content.empty_state`: must not be blank",
                "invalid configuration for `content.empty_state`: must not be blank",
            ]
        );
    }
}
