//! Error types for shop_inventory

use std::fmt;

/// Unified error type for catalog operations
#[derive(Debug)]
pub enum Error {
    /// A field value failed validation
    Validation {
        field: &'static str,
        reason: String,
    },
    /// No product with the given ID exists in the catalog
    NotFound(u64),
    /// Store file is unreadable or structurally corrupt
    Persistence(String),
    /// Export destination could not be written
    Export(String),
}

impl Error {
    /// Shorthand for a validation failure on a named field
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation { field, reason } => write!(f, "Invalid {}: {}", field, reason),
            Error::NotFound(id) => write!(f, "Product with ID {} not found", id),
            Error::Persistence(msg) => write!(f, "Persistence error: {}", msg),
            Error::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;
