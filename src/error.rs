//! Error types for docbeam operations.

use thiserror::Error;

/// Errors that can occur while translating a documentation page.
///
/// Only upstream invariant violations surface here. Content-dependent
/// misses (an unknown asset path, a broken link) degrade to empty or
/// unresolved references instead of failing the page.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No documentation entity for reference: {0}")]
    NotFound(String),

    #[error("Invalid hierarchy: {0}")]
    InvalidHierarchy(String),
}

pub type Result<T> = std::result::Result<T, Error>;
