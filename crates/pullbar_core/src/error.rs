//! Sheet error types
//!
//! The component is best-effort: public operations degrade to no-ops rather
//! than fail. These variants exist for internal `Result` plumbing and for
//! hosts that want to inspect why a degradation happened.

use thiserror::Error;

/// Sheet-related errors
#[derive(Error, Debug)]
pub enum SheetError {
    /// Sheet has not been shown over a host surface yet
    #[error("Sheet is not attached to a host surface")]
    NotAttached,

    /// No content view was supplied at construction
    #[error("Sheet has no content view")]
    NoContent,

    /// The snap-point set is empty
    #[error("Snap-point set is empty")]
    EmptySnapPoints,
}

/// Result type for sheet operations
pub type Result<T> = std::result::Result<T, SheetError>;
