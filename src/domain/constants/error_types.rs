// src/domain/constants/error_types.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Error-category labels. Every value is the same string as its name.
#[derive(Debug, Clone, Copy)]
pub struct ErrorTypes;

impl ErrorTypes {
    pub const NAMESPACE: &'static str = "ErrorTypes";

    pub const VALIDATION_ERROR: &'static str = "VALIDATION_ERROR";
    pub const SERVER_ERROR: &'static str = "SERVER_ERROR";
    pub const UNAUTHORIZED_ERROR: &'static str = "UNAUTHORIZED_ERROR";
    pub const NOT_FOUND_ERROR: &'static str = "NOT_FOUND_ERROR";

    /// `(name, value)` pairs in declaration order.
    pub const ENTRIES: [(&'static str, &'static str); 4] = [
        ("VALIDATION_ERROR", Self::VALIDATION_ERROR),
        ("SERVER_ERROR", Self::SERVER_ERROR),
        ("UNAUTHORIZED_ERROR", Self::UNAUTHORIZED_ERROR),
        ("NOT_FOUND_ERROR", Self::NOT_FOUND_ERROR),
    ];

    /// Resolve a label by its constant name. Matching is exact.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownName`] when `name` is not one of the
    /// four labels.
    pub fn lookup(name: &str) -> DomainResult<&'static str> {
        Self::ENTRIES
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| DomainError::UnknownName {
                namespace: Self::NAMESPACE,
                name: name.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    ValidationError,
    ServerError,
    UnauthorizedError,
    NotFoundError,
}

impl ErrorType {
    pub const ALL: [Self; 4] = [
        Self::ValidationError,
        Self::ServerError,
        Self::UnauthorizedError,
        Self::NotFoundError,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationError => ErrorTypes::VALIDATION_ERROR,
            Self::ServerError => ErrorTypes::SERVER_ERROR,
            Self::UnauthorizedError => ErrorTypes::UNAUTHORIZED_ERROR,
            Self::NotFoundError => ErrorTypes::NOT_FOUND_ERROR,
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnknownErrorType(s.to_string()))
    }
}

impl From<ErrorType> for &'static str {
    fn from(value: ErrorType) -> Self {
        value.as_str()
    }
}
