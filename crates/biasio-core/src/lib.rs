//! Bias In, Bias Out core
//!
//! Types and errors shared by the response classifier and the HTTP server.
//!
//! This crate provides:
//! - The demographic signals detected in a message (region, gender)
//! - The composed biased/fair response record returned to clients
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{BiasResponse, Gender, Region, UNSPECIFIED};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{BiasResponse, Gender, Region};
}
