//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `From` impls or wrap it as one variant.

use thiserror::Error;

/// The error type for `arena-core` and a common base for the other crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `arena-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
