pub mod alignment;
pub mod position;
pub mod variant;

pub use alignment::{AutoFlow, ContentAlignment, CssKeyword, ItemAlignment, SelfAlignment};
pub use position::{GridLine, GridPosition, GridPositionBuilder};
pub use variant::{DerivedStyles, GridLayoutVariant, ThemeNames, derive_styles};
