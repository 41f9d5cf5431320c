// src/domain/constants/status_codes.rs
use crate::domain::errors::{DomainError, DomainResult};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// HTTP-style status codes shared across the application.
#[derive(Debug, Clone, Copy)]
pub struct StatusCodes;

impl StatusCodes {
    pub const NAMESPACE: &'static str = "StatusCodes";

    pub const SUCCESS: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const ACCEPTED: u16 = 202;
    pub const BAD_REQUEST: u16 = 400;
    pub const UNAUTHORIZED: u16 = 401;
    pub const FORBIDDEN: u16 = 403;
    pub const NOT_FOUND: u16 = 404;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;

    /// `(name, code)` pairs in declaration order.
    pub const ENTRIES: [(&'static str, u16); 8] = [
        ("SUCCESS", Self::SUCCESS),
        ("CREATED", Self::CREATED),
        ("ACCEPTED", Self::ACCEPTED),
        ("BAD_REQUEST", Self::BAD_REQUEST),
        ("UNAUTHORIZED", Self::UNAUTHORIZED),
        ("FORBIDDEN", Self::FORBIDDEN),
        ("NOT_FOUND", Self::NOT_FOUND),
        ("INTERNAL_SERVER_ERROR", Self::INTERNAL_SERVER_ERROR),
    ];

    /// Resolve a status code by its constant name. Matching is exact.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownName`] when `name` is not one of the
    /// eight codes.
    pub fn lookup(name: &str) -> DomainResult<u16> {
        Self::ENTRIES
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, code)| *code)
            .ok_or_else(|| DomainError::UnknownName {
                namespace: Self::NAMESPACE,
                name: name.to_string(),
            })
    }

    #[must_use]
    pub fn name_of(code: u16) -> Option<&'static str> {
        Self::ENTRIES
            .iter()
            .find(|(_, value)| *value == code)
            .map(|(name, _)| *name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Success,
    ClientError,
    ServerError,
}

impl StatusClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::ClientError => "client_error",
            Self::ServerError => "server_error",
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed view over [`StatusCodes`]. Serializes as the bare integer.
///
/// Variants are declared in the same order as [`StatusCodes::ENTRIES`]; the
/// discriminant indexes that table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum AppStatus {
    Success,
    Created,
    Accepted,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    InternalServerError,
}

impl AppStatus {
    pub const ALL: [Self; 8] = [
        Self::Success,
        Self::Created,
        Self::Accepted,
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::InternalServerError,
    ];

    #[must_use]
    pub const fn code(self) -> u16 {
        StatusCodes::ENTRIES[self as usize].1
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        StatusCodes::ENTRIES[self as usize].0
    }

    #[must_use]
    pub const fn class(self) -> StatusClass {
        match self.code() / 100 {
            2 => StatusClass::Success,
            4 => StatusClass::ClientError,
            _ => StatusClass::ServerError,
        }
    }

    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Created => StatusCode::CREATED,
            Self::Accepted => StatusCode::ACCEPTED,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.name())
    }
}

impl TryFrom<u16> for AppStatus {
    type Error = DomainError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == value)
            .ok_or(DomainError::UnknownStatusCode(value))
    }
}

impl From<AppStatus> for u16 {
    fn from(value: AppStatus) -> Self {
        value.code()
    }
}

impl From<AppStatus> for StatusCode {
    fn from(value: AppStatus) -> Self {
        value.http_status()
    }
}

impl FromStr for AppStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.name() == s)
            .ok_or_else(|| DomainError::UnknownName {
                namespace: StatusCodes::NAMESPACE,
                name: s.to_string(),
            })
    }
}
