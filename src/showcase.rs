//! Ready-made grid layouts.
//!
//! Each function builds one self-contained layout and returns it with a
//! title and a short description. The demos print them as HTML; the tests
//! use them as fixtures.

use gridcss::{AutoFlow, GridLayoutVariant, GridPosition, ItemAlignment};
use gridlayout::{
    Component, Element, GridLayout, HasOrderedComponents, HasSize, HasThemeVariant, Result,
};

const COLORS: [&str; 12] = [
    "#78909C", "#546E7A", "#37474F", "#263238", "#455A64", "#607D8B", "#90A4AE", "#B0BEC5",
    "#CFD8DC", "#ECEFF1", "#78909C", "#546E7A",
];

const BORDER: &str = "1px solid #9E9E9E";

/// A titled layout.
#[derive(Debug, Clone)]
pub struct Showcase {
    pub title: &'static str,
    pub description: &'static str,
    pub layout: GridLayout,
}

impl Showcase {
    fn new(title: &'static str, description: &'static str, layout: GridLayout) -> Self {
        Self {
            title,
            description,
            layout,
        }
    }

    pub fn id(&self) -> Option<String> {
        self.layout.root_element().id()
    }

    pub fn to_html(&self) -> String {
        self.layout.root_element().to_html()
    }
}

/// Every layout with its default settings.
pub fn all() -> Result<Vec<Showcase>> {
    Ok(vec![
        basic()?,
        column_templates()?,
        template_areas()?,
        alignment(ItemAlignment::Stretch, ItemAlignment::Stretch)?,
        positioning()?,
        auto_flow(AutoFlow::Row)?,
        responsive()?,
    ])
}

/// Three equal columns with a gap.
pub fn basic() -> Result<Showcase> {
    let grid = bordered_grid("basic-grid");
    grid.set_column_count(3)?;
    grid.set_gap(Some("10px"));
    grid.set_width(Some("100%"));
    add_numbered(&grid, "basic-item", 6)?;

    Ok(Showcase::new(
        "Basic GridLayout",
        "A simple 3-column grid with gap",
        grid,
    ))
}

/// Explicit column and row templates.
pub fn column_templates() -> Result<Showcase> {
    let grid = bordered_grid("grid-with-templates");
    grid.set_columns(Some("1fr 2fr 1fr"));
    grid.set_rows(Some("auto auto"));
    grid.set_gap(Some("10px"));
    grid.set_width(Some("100%"));
    add_numbered(&grid, "template-item", 6)?;

    Ok(Showcase::new(
        "Grid with Templates",
        "Column template: 1fr 2fr 1fr (middle column is twice as wide)",
        grid,
    ))
}

/// Holy grail layout built from named areas.
pub fn template_areas() -> Result<Showcase> {
    let grid = bordered_grid("grid-with-areas");
    grid.set_template_areas(&[
        "header header header",
        "nav    main   aside",
        "footer footer footer",
    ]);
    grid.set_columns(Some("150px 1fr 150px"));
    grid.set_rows(Some("auto 1fr auto"));
    grid.set_gap(Some("10px"));
    grid.set_width(Some("100%"));
    grid.set_height(Some("300px"));

    let areas = [
        ("header", "Header", "#1976D2"),
        ("nav", "Nav", "#388E3C"),
        ("main", "Main Content", "#FFA000"),
        ("aside", "Aside", "#7B1FA2"),
        ("footer", "Footer", "#C2185B"),
    ];
    for (area, label, color) in areas {
        let child = area_cell(label, color).with_id(format!("area-{area}"));
        grid.add(&[&child])?;
        grid.set_area(&child, Some(area))?;
    }

    Ok(Showcase::new(
        "Grid with Template Areas",
        "Holy Grail layout using named grid areas",
        grid,
    ))
}

/// Three unsized items aligned inside their cells.
pub fn alignment(justify: ItemAlignment, align: ItemAlignment) -> Result<Showcase> {
    let grid = bordered_grid("grid-with-alignment");
    grid.set_column_count(3)?;
    grid.set_gap(Some("10px"));
    grid.set_width(Some("400px"));
    grid.set_height(Some("200px"));
    grid.set_justify_items(Some(justify));
    grid.set_align_items(Some(align));

    for index in 1..=3 {
        let child = cell(index).with_id(format!("align-item-{index}"));
        // Unsized so that stretch is visible.
        child.remove_style("min-height");
        grid.add(&[&child])?;
    }

    Ok(Showcase::new(
        "Grid with Alignment",
        "Control item alignment within cells",
        grid,
    ))
}

/// Items placed by line numbers and spans.
pub fn positioning() -> Result<Showcase> {
    let grid = bordered_grid("grid-with-positioning");
    grid.set_columns(Some("repeat(4, 1fr)"));
    grid.set_rows(Some("repeat(3, 80px)"));
    grid.set_gap(Some("5px"));
    grid.set_width(Some("100%"));

    let placements = [
        ("single-cell", "1x1", "#9E9E9E", GridPosition::at(1, 1)?),
        (
            "span-2-col",
            "Span 2 columns",
            "#1976D2",
            GridPosition::builder().column(2)?.row(1)?.column_span(2)?.build(),
        ),
        (
            "span-2-row",
            "Span 2 rows",
            "#388E3C",
            GridPosition::builder().column(4)?.row(1)?.row_span(2)?.build(),
        ),
        ("positioned", "Position 3,2", "#FFA000", GridPosition::at(3, 2)?),
        ("span-both", "2x2 span", "#C2185B", GridPosition::spanning(1, 2, 2, 2)?),
    ];
    for (id, label, color, position) in placements {
        let child = area_cell(label, color).with_id(id);
        grid.add(&[&child])?;
        grid.set_position(&child, &position)?;
    }

    Ok(Showcase::new(
        "Grid with Positioning",
        "Components placed at specific positions with spans",
        grid,
    ))
}

/// Spanning items that leave holes unless the flow is dense.
pub fn auto_flow(flow: AutoFlow) -> Result<Showcase> {
    let grid = bordered_grid("grid-with-auto-flow");
    grid.set_columns(Some("repeat(4, 80px)"));
    grid.set_rows(Some("repeat(3, 60px)"));
    grid.set_gap(Some("5px"));
    grid.set_auto_flow(Some(flow));

    // Item 2 does not fit after item 1 and leaves a hole that only a dense
    // flow fills with item 3.
    for (index, span) in [(1, 2), (2, 3), (3, 2)] {
        let child = cell(index).with_id(format!("auto-item-{index}"));
        grid.add(&[&child])?;
        let position = GridPosition::builder().column_span(span)?.build();
        grid.set_position(&child, &position)?;
    }
    for index in 4..=6 {
        grid.add(&[&cell(index).with_id(format!("auto-item-{index}"))])?;
    }

    Ok(Showcase::new(
        "Grid with Auto Flow",
        "ROW vs COLUMN changes flow direction. DENSE fills gaps left by spanning items.",
        grid,
    ))
}

/// Column count that follows the container width.
pub fn responsive() -> Result<Showcase> {
    let grid = bordered_grid("responsive-grid");
    grid.set_columns(Some("repeat(auto-fill, minmax(150px, 1fr))"));
    grid.set_gap(Some("10px"));
    grid.set_width(Some("100%"));
    add_numbered(&grid, "responsive-item", 12)?;

    Ok(Showcase::new(
        "Responsive Grid",
        "Using auto-fill with minmax for responsive columns",
        grid,
    ))
}

/// A 3-column grid carrying one theme variant.
pub fn theme_variant(variant: GridLayoutVariant) -> Result<Showcase> {
    let grid = bordered_grid(&format!("theme-{}", variant.variant_name()));
    grid.set_column_count(3)?;
    grid.add_theme_variants(&[variant]);
    add_numbered(&grid, "theme-item", 3)?;

    Ok(Showcase::new(
        "Grid with Theme Variant",
        "Spacing, padding and margin variants written as inline styles",
        grid,
    ))
}

fn bordered_grid(id: &str) -> GridLayout {
    let grid = GridLayout::with_element(Element::div().with_id(id));
    grid.root_element().set_style("border", BORDER);
    grid
}

fn add_numbered(grid: &GridLayout, prefix: &str, count: usize) -> Result<()> {
    for index in 1..=count {
        let child = cell(index).with_id(format!("{prefix}-{index}"));
        grid.add(&[&child])?;
    }
    Ok(())
}

fn cell(index: usize) -> Element {
    let element = Element::div().with_text(format!("Item {index}"));
    let color = COLORS[(index - 1) % COLORS.len()];
    element.update_style(|style| {
        style.set("background-color", color);
        style.set("color", "white");
        style.set("padding", "var(--lumo-space-m)");
        style.set("min-height", "50px");
    });
    element
}

fn area_cell(label: &str, color: &str) -> Element {
    let element = Element::div().with_text(label);
    element.update_style(|style| {
        style.set("background-color", color);
        style.set("color", "white");
        style.set("padding", "var(--lumo-space-s)");
    });
    element
}
