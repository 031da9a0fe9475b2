//! Rendered output of complete layouts.

use gridcss::{GridLayoutVariant, GridPosition, SelfAlignment};
use gridlayout::{Component, Element, GridLayout, HasOrderedComponents, HasThemeVariant};

#[test]
fn test_holy_grail_layout_html() {
    let layout = GridLayout::new();
    layout.set_template_areas(&["header header", "nav main"]);
    layout.set_columns(Some("200px 1fr"));
    layout.set_gap(Some("8px"));

    let header = Element::new("header").with_text("Header");
    let nav = Element::new("nav").with_text("Nav");
    let main = Element::new("main").with_text("Main");
    layout.add(&[&header, &nav, &main]).unwrap();

    for (child, area) in [(&header, "header"), (&nav, "nav"), (&main, "main")] {
        layout.set_area(child, Some(area)).unwrap();
    }

    insta::assert_snapshot!(
        layout.root_element().to_html(),
        @r#"<div class="grid-layout" style="display: grid; grid-template-areas: &quot;header header&quot; &quot;nav main&quot;; grid-template-columns: 200px 1fr; gap: 8px"><header style="grid-area: header">Header</header><nav style="grid-area: nav">Nav</nav><main style="grid-area: main">Main</main></div>"#
    );
}

#[test]
fn test_positioned_items_html() {
    let layout = GridLayout::new();
    layout.set_column_count(3).unwrap();
    layout.add_theme_variants(&[GridLayoutVariant::LumoSpacingS]);

    let wide = Element::div().with_id("wide");
    let corner = Element::div().with_id("corner");
    layout.add(&[&wide, &corner]).unwrap();

    layout.set_position(&wide, &GridPosition::spanning(1, 1, 2, 1).unwrap()).unwrap();
    layout.set_position(&corner, &GridPosition::at(3, 2).unwrap()).unwrap();
    layout.set_justify_self(Some(SelfAlignment::End), &[&corner]);

    insta::assert_snapshot!(
        layout.root_element().to_html(),
        @r#"<div class="grid-layout" theme="spacing-s" style="display: grid; grid-template-columns: repeat(3, 1fr); gap: var(--lumo-space-s, 0.5rem)"><div id="wide" style="grid-column: 1 / span 2; grid-row: 1 / span 1"></div><div id="corner" style="grid-column: 3; grid-row: 2; justify-self: end"></div></div>"#
    );
}
