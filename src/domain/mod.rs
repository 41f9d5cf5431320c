// src/domain/mod.rs
pub mod constants;
pub mod errors;
