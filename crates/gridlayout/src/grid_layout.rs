//! Grid container component.
//!
//! [`GridLayout`] renders as a `div` with `display: grid` and exposes the
//! CSS Grid container and item properties as typed accessors. It holds no
//! state of its own: every value lives in the inline style of the layout
//! element or of the child being placed, and the browser does the actual
//! layout.
//!
//! ## Properties
//!
//! ```css
//! .grid-layout {
//!     display: grid;
//!     grid-template-columns: repeat(3, 1fr);   /* set_columns / set_column_count */
//!     grid-template-rows: auto 1fr auto;       /* set_rows / set_row_count */
//!     grid-template-areas: "header header" "nav main";
//!     gap: 10px;                               /* also row-gap, column-gap */
//!     justify-items: center;                   /* also align-items */
//!     justify-content: space-between;          /* also align-content */
//!     grid-auto-flow: row dense;
//!     grid-auto-rows: minmax(100px, auto);     /* also grid-auto-columns */
//! }
//!
//! .child {
//!     grid-column: 2 / span 2;                 /* set_position */
//!     grid-row: 1;
//!     grid-area: header;                       /* set_area */
//!     justify-self: end;                       /* also align-self */
//! }
//! ```
//!
//! A child is placed either by lines (`grid-column` / `grid-row`) or by a
//! named area (`grid-area`), never both: each placement call clears the
//! other kind first.

use gridcss::properties::{
    ALIGN_CONTENT, ALIGN_ITEMS, ALIGN_SELF, COLUMN_GAP, DISPLAY, DISPLAY_GRID, GAP, GRID_AREA,
    GRID_AUTO_COLUMNS, GRID_AUTO_FLOW, GRID_AUTO_ROWS, GRID_COLUMN, GRID_LAYOUT_CLASS, GRID_ROW,
    GRID_TEMPLATE_AREAS, GRID_TEMPLATE_COLUMNS, GRID_TEMPLATE_ROWS, JUSTIFY_CONTENT,
    JUSTIFY_ITEMS, JUSTIFY_SELF, MARGIN, PADDING, ROW_GAP,
};
use gridcss::{
    AutoFlow, ContentAlignment, CssKeyword, GridCssError, GridLayoutVariant, GridPosition,
    ItemAlignment, SelfAlignment, ThemeNames, derive_styles,
};

use crate::component::{
    Component, HasElement, HasOrderedComponents, HasSize, HasThemeVariant, ThemableLayout,
    resolve, set_or_remove,
};
use crate::element::Element;
use crate::error::{LayoutError, Result};

const WRAP_UNSUPPORTED: &str = "CSS Grid does not support wrap. Use \
    set_columns(Some(\"repeat(auto-fill, minmax(200px, 1fr))\")) for responsive layouts";

/// A layout that arranges its children with CSS Grid.
///
/// Cloning a `GridLayout` yields another handle to the same element.
///
/// # Example
///
/// ```rust
/// use gridcss::GridPosition;
/// use gridlayout::{Element, GridLayout, HasOrderedComponents};
///
/// let layout = GridLayout::new();
/// layout.set_column_count(3)?;
/// layout.set_gap(Some("10px"));
///
/// let header = Element::div();
/// layout.add(&[&header])?;
/// layout.set_position(&header, &GridPosition::spanning(1, 1, 3, 1)?)?;
///
/// assert_eq!(header.style("grid-column").as_deref(), Some("1 / span 3"));
/// # Ok::<(), gridlayout::LayoutError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GridLayout {
    element: Element,
}

impl GridLayout {
    /// Create an empty grid layout backed by a new `div`.
    pub fn new() -> Self {
        Self::with_element(Element::div())
    }

    /// Create a grid layout on an existing element.
    ///
    /// The element gets the layout class and `display: grid`.
    pub fn with_element(element: Element) -> Self {
        element.add_class(GRID_LAYOUT_CLASS);
        element.set_style(DISPLAY, DISPLAY_GRID);
        Self { element }
    }

    /// Create a grid layout and add `children` to it.
    pub fn with_children(children: &[&dyn HasElement]) -> Result<Self> {
        let layout = Self::new();
        layout.add(children)?;
        Ok(layout)
    }

    fn style(&self, name: &str) -> Option<String> {
        self.element.style(name)
    }

    fn set_or_remove(&self, name: &str, value: Option<&str>) {
        set_or_remove(&self.element, name, value);
    }

    // ==================== Column/Row Templates ====================

    /// Set `grid-template-columns` verbatim; `None` removes it.
    pub fn set_columns(&self, columns: Option<&str>) {
        self.set_or_remove(GRID_TEMPLATE_COLUMNS, columns);
    }

    /// Set `count` equal columns (`repeat(count, 1fr)`).
    pub fn set_column_count(&self, count: i32) -> Result<()> {
        let template = repeat_template("column count", count)?;
        self.set_columns(Some(&template));
        Ok(())
    }

    pub fn columns(&self) -> Option<String> {
        self.style(GRID_TEMPLATE_COLUMNS)
    }

    /// Set `grid-template-rows` verbatim; `None` removes it.
    pub fn set_rows(&self, rows: Option<&str>) {
        self.set_or_remove(GRID_TEMPLATE_ROWS, rows);
    }

    /// Set `count` equal rows (`repeat(count, 1fr)`).
    pub fn set_row_count(&self, count: i32) -> Result<()> {
        let template = repeat_template("row count", count)?;
        self.set_rows(Some(&template));
        Ok(())
    }

    pub fn rows(&self) -> Option<String> {
        self.style(GRID_TEMPLATE_ROWS)
    }

    // ==================== Template Areas ====================

    /// Define named areas, one string per grid row.
    ///
    /// Each row lists area names separated by spaces, `.` for an empty cell.
    /// An empty slice removes the property.
    pub fn set_template_areas(&self, rows: &[&str]) {
        let value = (!rows.is_empty()).then(|| {
            rows.iter()
                .map(|row| format!("\"{row}\""))
                .collect::<Vec<_>>()
                .join(" ")
        });
        self.set_or_remove(GRID_TEMPLATE_AREAS, value.as_deref());
    }

    pub fn template_areas(&self) -> Option<String> {
        self.style(GRID_TEMPLATE_AREAS)
    }

    // ==================== Gaps ====================

    /// Set `gap`. Theme variant changes overwrite this value.
    pub fn set_gap(&self, gap: Option<&str>) {
        self.set_or_remove(GAP, gap);
    }

    pub fn gap(&self) -> Option<String> {
        self.style(GAP)
    }

    pub fn set_column_gap(&self, column_gap: Option<&str>) {
        self.set_or_remove(COLUMN_GAP, column_gap);
    }

    pub fn column_gap(&self) -> Option<String> {
        self.style(COLUMN_GAP)
    }

    pub fn set_row_gap(&self, row_gap: Option<&str>) {
        self.set_or_remove(ROW_GAP, row_gap);
    }

    pub fn row_gap(&self) -> Option<String> {
        self.style(ROW_GAP)
    }

    // ==================== Alignment ====================

    pub fn set_justify_items(&self, alignment: Option<ItemAlignment>) {
        self.set_or_remove(JUSTIFY_ITEMS, alignment.map(|a| a.css_value()));
    }

    pub fn justify_items(&self) -> ItemAlignment {
        ItemAlignment::from_css_value(self.style(JUSTIFY_ITEMS).as_deref(), ItemAlignment::Stretch)
    }

    pub fn set_align_items(&self, alignment: Option<ItemAlignment>) {
        self.set_or_remove(ALIGN_ITEMS, alignment.map(|a| a.css_value()));
    }

    pub fn align_items(&self) -> ItemAlignment {
        ItemAlignment::from_css_value(self.style(ALIGN_ITEMS).as_deref(), ItemAlignment::Stretch)
    }

    pub fn set_justify_content(&self, alignment: Option<ContentAlignment>) {
        self.set_or_remove(JUSTIFY_CONTENT, alignment.map(|a| a.css_value()));
    }

    pub fn justify_content(&self) -> ContentAlignment {
        ContentAlignment::from_css_value(
            self.style(JUSTIFY_CONTENT).as_deref(),
            ContentAlignment::Normal,
        )
    }

    pub fn set_align_content(&self, alignment: Option<ContentAlignment>) {
        self.set_or_remove(ALIGN_CONTENT, alignment.map(|a| a.css_value()));
    }

    pub fn align_content(&self) -> ContentAlignment {
        ContentAlignment::from_css_value(
            self.style(ALIGN_CONTENT).as_deref(),
            ContentAlignment::Normal,
        )
    }

    // ==================== Auto Flow ====================

    pub fn set_auto_flow(&self, auto_flow: Option<AutoFlow>) {
        self.set_or_remove(GRID_AUTO_FLOW, auto_flow.map(|a| a.css_value()));
    }

    pub fn auto_flow(&self) -> AutoFlow {
        AutoFlow::from_css_value(self.style(GRID_AUTO_FLOW).as_deref(), AutoFlow::Row)
    }

    /// Size of implicitly created rows.
    pub fn set_auto_rows(&self, auto_rows: Option<&str>) {
        self.set_or_remove(GRID_AUTO_ROWS, auto_rows);
    }

    pub fn auto_rows(&self) -> Option<String> {
        self.style(GRID_AUTO_ROWS)
    }

    /// Size of implicitly created columns.
    pub fn set_auto_columns(&self, auto_columns: Option<&str>) {
        self.set_or_remove(GRID_AUTO_COLUMNS, auto_columns);
    }

    pub fn auto_columns(&self) -> Option<String> {
        self.style(GRID_AUTO_COLUMNS)
    }

    // ==================== Item Position ====================

    /// Place `child` by grid lines.
    ///
    /// Clears any `grid-area` first. An axis the position leaves empty has
    /// its property removed, so placing by row only drops an earlier column.
    pub fn set_position(&self, child: &dyn HasElement, position: &GridPosition) -> Result<()> {
        let element = resolve(child)?;
        let column = position.column_value();
        let row = position.row_value();

        if let Some(area) = element.style(GRID_AREA) {
            log::debug!("set_position: clearing grid-area '{area}' on {element:?}");
        }
        element.update_style(|style| {
            style.remove(GRID_AREA);
            style.set_or_remove(GRID_COLUMN, column.as_deref());
            style.set_or_remove(GRID_ROW, row.as_deref());
        });
        Ok(())
    }

    /// Read back the line placement of `child`.
    ///
    /// `None` when neither `grid-column` nor `grid-row` is set. Values not
    /// written by [`set_position`](Self::set_position) (named lines,
    /// negative indices) fail with a syntax error.
    pub fn position(&self, child: &dyn HasElement) -> Result<Option<GridPosition>> {
        let element = resolve(child)?;
        let column = element.style(GRID_COLUMN);
        let row = element.style(GRID_ROW);
        if column.is_none() && row.is_none() {
            return Ok(None);
        }
        let position = GridPosition::from_css(column.as_deref(), row.as_deref())?;
        Ok(Some(position))
    }

    /// Remove `grid-column`, `grid-row` and `grid-area` from `child`.
    pub fn clear_position(&self, child: &dyn HasElement) -> Result<()> {
        let element = resolve(child)?;
        element.update_style(|style| {
            style.remove(GRID_COLUMN);
            style.remove(GRID_ROW);
            style.remove(GRID_AREA);
        });
        Ok(())
    }

    /// Place `child` in a named area.
    ///
    /// Clears `grid-column` and `grid-row` first. `None` or an empty name
    /// removes the area.
    pub fn set_area(&self, child: &dyn HasElement, area: Option<&str>) -> Result<()> {
        let element = resolve(child)?;
        let area = area.filter(|name| !name.is_empty());

        if element.style(GRID_COLUMN).is_some() || element.style(GRID_ROW).is_some() {
            log::debug!("set_area: clearing line placement on {element:?}");
        }
        element.update_style(|style| {
            style.remove(GRID_COLUMN);
            style.remove(GRID_ROW);
            style.set_or_remove(GRID_AREA, area);
        });
        Ok(())
    }

    pub fn area(&self, child: &dyn HasElement) -> Result<Option<String>> {
        Ok(resolve(child)?.style(GRID_AREA))
    }

    // ==================== Item Self-Alignment ====================

    /// Set (or with `None`, remove) `justify-self` on each child.
    ///
    /// Children are handled one by one; a handle that no longer resolves is
    /// skipped and does not stop the rest.
    pub fn set_justify_self(&self, alignment: Option<SelfAlignment>, children: &[&dyn HasElement]) {
        apply_to_each(children, JUSTIFY_SELF, alignment.map(|a| a.css_value()));
    }

    pub fn justify_self(&self, child: &dyn HasElement) -> Result<SelfAlignment> {
        let value = resolve(child)?.style(JUSTIFY_SELF);
        Ok(SelfAlignment::from_css_value(value.as_deref(), SelfAlignment::Auto))
    }

    /// Set (or with `None`, remove) `align-self` on each child.
    pub fn set_align_self(&self, alignment: Option<SelfAlignment>, children: &[&dyn HasElement]) {
        apply_to_each(children, ALIGN_SELF, alignment.map(|a| a.css_value()));
    }

    pub fn align_self(&self, child: &dyn HasElement) -> Result<SelfAlignment> {
        let value = resolve(child)?.style(ALIGN_SELF);
        Ok(SelfAlignment::from_css_value(value.as_deref(), SelfAlignment::Auto))
    }

    // ==================== Theme Variants ====================

    /// Rewrite `gap`, `padding` and `margin` from the current theme names.
    ///
    /// A `gap` set through [`set_gap`](Self::set_gap) does not survive this.
    fn apply_theme_variant_styles(&self) {
        let names: ThemeNames = self
            .element
            .theme_names()
            .iter()
            .map(String::as_str)
            .collect();
        let derived = derive_styles(names);
        log::debug!("theme names {names:?} derive {derived:?}");

        self.element.update_style(|style| {
            style.set_or_remove(GAP, derived.gap);
            style.set_or_remove(PADDING, derived.padding);
            style.set_or_remove(MARGIN, derived.margin);
        });
    }

    fn toggle_variant(&self, variant: GridLayoutVariant, on: bool) {
        if on {
            self.add_theme_variants(&[variant]);
        } else {
            self.remove_theme_variants(&[variant]);
        }
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new()
    }
}

fn repeat_template(name: &'static str, count: i32) -> Result<String> {
    if count < 1 {
        return Err(GridCssError::InvalidArgument { name, value: count }.into());
    }
    Ok(format!("repeat({count}, 1fr)"))
}

fn apply_to_each(children: &[&dyn HasElement], name: &str, value: Option<&str>) {
    for child in children {
        match child.element() {
            Some(element) => set_or_remove(&element, name, value),
            None => log::warn!("{name}: skipping a child that no longer resolves to an element"),
        }
    }
}

impl HasElement for GridLayout {
    fn element(&self) -> Option<Element> {
        Some(self.element.clone())
    }
}

impl Component for GridLayout {
    fn root_element(&self) -> &Element {
        &self.element
    }
}

impl HasOrderedComponents for GridLayout {}

impl HasSize for GridLayout {}

impl HasThemeVariant<GridLayoutVariant> for GridLayout {
    fn add_theme_variants(&self, variants: &[GridLayoutVariant]) {
        for variant in variants {
            self.element.add_theme_name(variant.variant_name());
        }
        self.apply_theme_variant_styles();
    }

    fn remove_theme_variants(&self, variants: &[GridLayoutVariant]) {
        for variant in variants {
            self.element.remove_theme_name(variant.variant_name());
        }
        self.apply_theme_variant_styles();
    }
}

impl ThemableLayout for GridLayout {
    fn set_margin(&self, margin: bool) {
        self.toggle_variant(GridLayoutVariant::LumoMargin, margin);
    }

    fn is_margin(&self) -> bool {
        self.element.has_theme_name("margin")
    }

    fn set_padding(&self, padding: bool) {
        self.toggle_variant(GridLayoutVariant::LumoPadding, padding);
    }

    fn is_padding(&self) -> bool {
        self.element.has_theme_name("padding")
    }

    fn set_spacing(&self, spacing: bool) {
        self.toggle_variant(GridLayoutVariant::LumoSpacing, spacing);
    }

    fn is_spacing(&self) -> bool {
        self.element.has_theme_name("spacing")
    }

    /// Always fails: grids have no wrapping axis. Use an `auto-fill` column
    /// template instead.
    fn set_wrap(&self, _wrap: bool) -> Result<()> {
        Err(LayoutError::Unsupported(WRAP_UNSUPPORTED))
    }

    fn is_wrap(&self) -> bool {
        false
    }
}
