//! # gridcss - CSS Grid value types
//!
//! The value layer behind [`gridlayout`]: everything here is plain data with no
//! notion of elements or style storage. This crate provides:
//!
//! - **Placement**: [`GridPosition`] and its validating builder, serialized to
//!   the `grid-column` / `grid-row` shorthand
//! - **Parsing**: reading that shorthand back into a position
//! - **Keywords**: alignment and auto-flow enums mapped to CSS keywords
//! - **Variants**: theme variants and the inline styles they imply
//!
//! ## Quick Start
//!
//! ```rust
//! use gridcss::GridPosition;
//!
//! let position = GridPosition::builder()
//!     .column(2)?
//!     .row(1)?
//!     .column_span(2)?
//!     .build();
//!
//! assert_eq!(position.column_value().as_deref(), Some("2 / span 2"));
//! assert_eq!(position.row_value().as_deref(), Some("1"));
//! # Ok::<(), gridcss::GridCssError>(())
//! ```
//!
//! ## Shorthand Forms
//!
//! | Fields set         | Output          |
//! |--------------------|-----------------|
//! | start              | `2`             |
//! | start + span       | `1 / span 3`    |
//! | span               | `span 2`        |
//! | start + end        | `1 / 4`         |
//! | end                | `auto / 4`      |
//! | nothing            | no value        |
//!
//! ## Modules
//!
//! - [`types`]: Positions, keyword enums and theme variants
//! - [`parser`]: Grid-line shorthand parsing
//! - [`properties`]: CSS property names used by the grid component
//! - [`error`]: Error types for validation and parsing failures
//!
//! [`gridlayout`]: https://docs.rs/gridlayout

pub mod error;
pub mod parser;
pub mod properties;
pub mod types;

pub use error::{GridCssError, Result};
pub use types::{
    AutoFlow, ContentAlignment, CssKeyword, DerivedStyles, GridLayoutVariant, GridPosition,
    GridPositionBuilder, ItemAlignment, SelfAlignment, ThemeNames, derive_styles,
};
