//! # gridlayout - CSS Grid container component
//!
//! A component layer over element style maps. [`GridLayout`] writes CSS Grid
//! container properties to its own element and item placement properties to
//! its children; layout itself is left to whatever renders the elements.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridcss::{GridPosition, ItemAlignment};
//! use gridlayout::{Element, GridLayout, HasOrderedComponents};
//!
//! let layout = GridLayout::new();
//! layout.set_template_areas(&["header header", "nav main"]);
//! layout.set_justify_items(Some(ItemAlignment::Center));
//!
//! let header = Element::div().with_text("Header");
//! let main = Element::div().with_text("Main");
//! layout.add(&[&header, &main])?;
//! layout.set_area(&header, Some("header"))?;
//! layout.set_position(&main, &GridPosition::at(2, 2)?)?;
//!
//! assert_eq!(layout.area(&header)?.as_deref(), Some("header"));
//! assert_eq!(main.style("grid-row").as_deref(), Some("2"));
//! # Ok::<(), gridlayout::LayoutError>(())
//! ```
//!
//! ## Modules
//!
//! - [`grid_layout`]: The grid container component
//! - [`component`]: Capability traits shared by components
//! - [`element`]: Shared element handles and HTML output
//! - [`style`]: The style map trait and the default inline style
//! - [`error`]: Error types
//! - [`log_init`]: File logger for demos and debugging
//! - [`testing`]: Style maps that record writes, for tests

pub mod component;
pub mod element;
pub mod error;
pub mod grid_layout;
pub mod log_init;
pub mod style;
pub mod testing;

pub use component::{
    Component, HasElement, HasOrderedComponents, HasSize, HasThemeVariant, ThemableLayout,
    ThemeVariant,
};
pub use element::{Element, WeakElement};
pub use error::{ErrorKind, LayoutError, Result};
pub use grid_layout::GridLayout;
pub use style::{InlineStyle, Style};
