//! CSS property names written by the grid component.
//!
//! Names are kebab-case, the form style maps store them in.

pub const DISPLAY: &str = "display";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";

// Container properties
pub const GRID_TEMPLATE_COLUMNS: &str = "grid-template-columns";
pub const GRID_TEMPLATE_ROWS: &str = "grid-template-rows";
pub const GRID_TEMPLATE_AREAS: &str = "grid-template-areas";
pub const GAP: &str = "gap";
pub const ROW_GAP: &str = "row-gap";
pub const COLUMN_GAP: &str = "column-gap";
pub const JUSTIFY_ITEMS: &str = "justify-items";
pub const ALIGN_ITEMS: &str = "align-items";
pub const JUSTIFY_CONTENT: &str = "justify-content";
pub const ALIGN_CONTENT: &str = "align-content";
pub const GRID_AUTO_ROWS: &str = "grid-auto-rows";
pub const GRID_AUTO_COLUMNS: &str = "grid-auto-columns";
pub const GRID_AUTO_FLOW: &str = "grid-auto-flow";
pub const PADDING: &str = "padding";
pub const MARGIN: &str = "margin";

// Item properties
pub const GRID_COLUMN: &str = "grid-column";
pub const GRID_ROW: &str = "grid-row";
pub const GRID_AREA: &str = "grid-area";
pub const JUSTIFY_SELF: &str = "justify-self";
pub const ALIGN_SELF: &str = "align-self";

/// Class name every grid layout element carries.
pub const GRID_LAYOUT_CLASS: &str = "grid-layout";

/// Display value of a grid container.
pub const DISPLAY_GRID: &str = "grid";
