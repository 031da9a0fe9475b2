//! CSS Grid layouts over element style maps.
//!
//! This crate bundles the two workspace crates:
//!
//! - [`gridcss`]: placement values, keyword enums and theme-variant styles
//! - [`gridlayout`]: the element tree and the [`GridLayout`](gridlayout::GridLayout) component
//!
//! and a [`showcase`] of ready-made layouts used by the demos.
//!
//! ```rust
//! use gridlayout_rs::prelude::*;
//!
//! let layout = GridLayout::new();
//! layout.set_columns(Some("repeat(auto-fill, minmax(150px, 1fr))"));
//! layout.add_theme_variants(&[GridLayoutVariant::LumoSpacingS]);
//!
//! assert_eq!(layout.gap().as_deref(), Some("var(--lumo-space-s, 0.5rem)"));
//! ```

pub mod showcase;

pub use gridcss;
pub use gridlayout;

/// Everything needed to build and place grid layouts.
pub mod prelude {
    pub use gridcss::{
        AutoFlow, ContentAlignment, CssKeyword, GridLayoutVariant, GridPosition, ItemAlignment,
        SelfAlignment,
    };
    pub use gridlayout::{
        Component, Element, GridLayout, HasElement, HasOrderedComponents, HasSize,
        HasThemeVariant, LayoutError, ThemableLayout,
    };
}
