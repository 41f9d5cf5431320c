// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown {namespace} constant '{name}'")]
    UnknownName {
        namespace: &'static str,
        name: String,
    },
    #[error("unknown error type '{0}'")]
    UnknownErrorType(String),
    #[error("unknown status code {0}")]
    UnknownStatusCode(u16),
}
