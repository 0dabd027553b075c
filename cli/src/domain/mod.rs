//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod credentials;
pub mod dotenv;
pub mod error;
pub mod manifest;

pub use credentials::{Credentials, RawCredentials, mask_token};
pub use error::InstallError;
pub use manifest::substitute;
