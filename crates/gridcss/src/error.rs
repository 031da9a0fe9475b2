//! Error types for grid value validation and parsing.
//!
//! Builders reject out-of-range line numbers and conflicting span/end
//! combinations at the call that introduces them; the shorthand parser
//! reports anything it does not recognise as a syntax error.

use thiserror::Error;

/// Errors that can occur while building or parsing grid values.
///
/// # Examples
///
/// ```rust
/// use gridcss::{GridCssError, GridPosition};
///
/// let result = GridPosition::builder().column(0);
/// assert!(matches!(result, Err(GridCssError::InvalidArgument { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridCssError {
    /// A line number, span or track count was below its minimum of 1.
    #[error("{name} must be >= 1, got {value}")]
    InvalidArgument { name: &'static str, value: i32 },

    /// A span was set while the matching end line was already set, or the
    /// other way around.
    #[error("cannot set both {set} and {existing}")]
    ConflictingState {
        set: &'static str,
        existing: &'static str,
    },

    /// A grid-line shorthand string could not be parsed.
    #[error("grid line syntax error: {0}")]
    InvalidSyntax(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, GridCssError>;
