//! Parsing of stored grid values.
//!
//! Style maps hand values back as plain strings. This module turns the
//! `grid-column` / `grid-row` shorthand written by
//! [`GridPosition`](crate::GridPosition) back into structured form.
//!
//! ## Submodules
//!
//! - [`placement`]: Grid-line shorthand (`2 / span 3`, `auto / 4`, ...)
//!
//! ## Example
//!
//! ```rust
//! use gridcss::parser::parse_grid_line;
//!
//! let line = parse_grid_line("2 / span 3").unwrap();
//! assert_eq!(line.start, Some(2));
//! assert_eq!(line.span, Some(3));
//! assert_eq!(line.end, None);
//! ```

pub mod placement;

pub use crate::parser::placement::parse_grid_line;
