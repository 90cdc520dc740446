//! Error type shared by the generator stages.

use std::path::PathBuf;

/// Failure raised while resolving a case or writing its files.
///
/// Every variant aborts the run before the stage that produced it writes
/// anything.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// A parameter is out of range or produces a degenerate discretization
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// A required XML template is absent from the template directory
    #[error("missing template file {}", .0.display())]
    MissingTemplate(PathBuf),

    /// A formula depends on a quantity the configuration does not define
    #[error("undefined symbol '{0}': set it explicitly in the case parameters")]
    UndefinedSymbol(&'static str),

    /// Parameter file could not be parsed
    #[error("failed to parse case parameters: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GenerationError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, GenerationError>;
