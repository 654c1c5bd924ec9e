//! Dashboard error types

use thiserror::Error;

/// Errors raised while dispatching callbacks
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// No callback produces this output component
    #[error("Unknown output component: {0}")]
    UnknownOutput(String),

    /// No callback listens to this input component
    #[error("Unknown input component: {0}")]
    UnknownInput(String),
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
