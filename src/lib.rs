//! Shared error-type labels and HTTP status codes, plus a read-only HTTP
//! service that publishes them.
pub mod config;
pub mod domain;
pub mod presentation;

pub use domain::constants::{AppStatus, ErrorType, ErrorTypes, StatusClass, StatusCodes};
