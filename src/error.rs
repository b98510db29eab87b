//! KeyRelay Error Types
//!
//! Centralized error handling for the injection pipeline.

use thiserror::Error;

/// Central error type for KeyRelay
#[derive(Error, Debug)]
pub enum InjectError {
    #[error("cannot inject empty text")]
    EmptyText,

    #[error("all injection backends failed, last error: {source}")]
    AllBackendsFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Result type alias for KeyRelay operations
pub type InjectResult<T> = Result<T, InjectError>;
