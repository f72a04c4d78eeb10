//! Error types for report composition and generation.

use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while building or generating a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A value outside its allowed enumeration was supplied. The message is
    /// fixed per argument: `"Invalid paper size"`, `"Invalid rotation"`,
    /// `"Invalid padding"`.
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// A template path exists but could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed template text, or an unresolved placeholder under strict
    /// substitution.
    #[error("template error: {0}")]
    Template(#[from] handlebars::RenderError),
}
