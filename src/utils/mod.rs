//! Helper functions used across the application.
//!
//! - [`code_generator`] - Short code generation
//! - [`password`] - Password hashing and verification

pub mod code_generator;
pub mod password;
