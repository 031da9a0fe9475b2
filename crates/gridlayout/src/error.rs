use gridcss::GridCssError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error(transparent)]
    Css(#[from] GridCssError),

    #[error("{0} does not resolve to an element")]
    MissingElement(&'static str),

    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("index {index} is out of bounds for {len} children")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("an element cannot be added to itself or to one of its descendants")]
    InvalidHierarchy,
}

/// Coarse classification of a [`LayoutError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    ConflictingState,
    InvalidSyntax,
    NullReference,
    UnsupportedOperation,
    OutOfBounds,
    Hierarchy,
}

impl LayoutError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LayoutError::Css(GridCssError::InvalidArgument { .. }) => ErrorKind::InvalidArgument,
            LayoutError::Css(GridCssError::ConflictingState { .. }) => ErrorKind::ConflictingState,
            LayoutError::Css(GridCssError::InvalidSyntax(_)) => ErrorKind::InvalidSyntax,
            LayoutError::MissingElement(_) => ErrorKind::NullReference,
            LayoutError::Unsupported(_) => ErrorKind::UnsupportedOperation,
            LayoutError::IndexOutOfBounds { .. } => ErrorKind::OutOfBounds,
            LayoutError::InvalidHierarchy => ErrorKind::Hierarchy,
        }
    }
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, LayoutError>;
