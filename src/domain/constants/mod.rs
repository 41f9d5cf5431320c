// src/domain/constants/mod.rs
pub mod error_types;
pub mod status_codes;

pub use error_types::{ErrorType, ErrorTypes};
pub use status_codes::{AppStatus, StatusClass, StatusCodes};
