//! Integration tests for GridLayout container properties.
//!
//! Each container setter writes one inline style property on the layout
//! element; getters read it back, falling back to the CSS default for
//! keyword properties.

use gridcss::{AutoFlow, ContentAlignment, ItemAlignment};
use gridlayout::{Component, Element, ErrorKind, GridLayout, HasOrderedComponents, ThemableLayout};

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn test_new_sets_display_grid() {
    let layout = GridLayout::new();
    assert_eq!(layout.root_element().style("display").as_deref(), Some("grid"));
    assert!(layout.root_element().has_class("grid-layout"));
    assert_eq!(layout.root_element().tag(), "div");
}

#[test]
fn test_with_children_adds_children() {
    let a = Element::div();
    let b = Element::div();
    let layout = GridLayout::with_children(&[&a, &b]).unwrap();

    assert_eq!(layout.root_element().style("display").as_deref(), Some("grid"));
    assert_eq!(layout.component_count(), 2);
    assert_eq!(layout.component_at(1), Some(b));
}

// ============================================================================
// TEMPLATES
// ============================================================================

#[test]
fn test_set_columns_template() {
    let layout = GridLayout::new();
    layout.set_columns(Some("1fr 2fr 1fr"));
    assert_eq!(layout.columns().as_deref(), Some("1fr 2fr 1fr"));
}

#[test]
fn test_set_column_count_creates_repeat_template() {
    let layout = GridLayout::new();
    layout.set_column_count(3).unwrap();
    assert_eq!(layout.columns().as_deref(), Some("repeat(3, 1fr)"));
}

#[test]
fn test_set_column_count_rejects_values_below_one() {
    let layout = GridLayout::new();
    layout.set_columns(Some("100px"));
    for count in [0, -1] {
        let err = layout.set_column_count(count).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
    // Rejected calls leave the previous value alone.
    assert_eq!(layout.columns().as_deref(), Some("100px"));
}

#[test]
fn test_set_columns_none_removes_property() {
    let layout = GridLayout::new();
    layout.set_columns(Some("1fr 1fr"));
    layout.set_columns(None);
    assert_eq!(layout.columns(), None);
    assert_eq!(layout.root_element().style("grid-template-columns"), None);
}

#[test]
fn test_set_rows_template() {
    let layout = GridLayout::new();
    layout.set_rows(Some("auto 1fr auto"));
    assert_eq!(layout.rows().as_deref(), Some("auto 1fr auto"));
}

#[test]
fn test_set_row_count_creates_repeat_template() {
    let layout = GridLayout::new();
    layout.set_row_count(2).unwrap();
    assert_eq!(layout.rows().as_deref(), Some("repeat(2, 1fr)"));
}

#[test]
fn test_set_row_count_rejects_zero() {
    let layout = GridLayout::new();
    let err = layout.set_row_count(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "row count must be >= 1, got 0");
    assert_eq!(layout.rows(), None);
}

#[test]
fn test_set_rows_none_removes_property() {
    let layout = GridLayout::new();
    layout.set_rows(Some("auto auto"));
    layout.set_rows(None);
    assert_eq!(layout.rows(), None);
}

#[test]
fn test_template_areas_multiple_rows() {
    let layout = GridLayout::new();
    layout.set_template_areas(&["header header", "main sidebar"]);
    assert_eq!(
        layout.template_areas().as_deref(),
        Some("\"header header\" \"main sidebar\"")
    );
}

#[test]
fn test_template_areas_single_row() {
    let layout = GridLayout::new();
    layout.set_template_areas(&["header"]);
    assert_eq!(layout.template_areas().as_deref(), Some("\"header\""));
}

#[test]
fn test_template_areas_empty_removes_property() {
    let layout = GridLayout::new();
    layout.set_template_areas(&["header header"]);
    layout.set_template_areas(&[]);
    assert_eq!(layout.template_areas(), None);
}

// ============================================================================
// GAPS
// ============================================================================

#[test]
fn test_gap_round_trip() {
    let layout = GridLayout::new();
    layout.set_gap(Some("10px"));
    assert_eq!(layout.gap().as_deref(), Some("10px"));
    layout.set_gap(None);
    assert_eq!(layout.gap(), None);
}

#[test]
fn test_column_and_row_gap() {
    let layout = GridLayout::new();
    layout.set_column_gap(Some("20px"));
    layout.set_row_gap(Some("15px"));
    assert_eq!(layout.column_gap().as_deref(), Some("20px"));
    assert_eq!(layout.row_gap().as_deref(), Some("15px"));

    layout.set_column_gap(None);
    assert_eq!(layout.column_gap(), None);
    assert_eq!(layout.row_gap().as_deref(), Some("15px"));
}

#[test]
fn test_gap_values_are_not_validated() {
    let layout = GridLayout::new();
    layout.set_gap(Some("calc(1rem + 2px) var(--x)"));
    assert_eq!(layout.gap().as_deref(), Some("calc(1rem + 2px) var(--x)"));
}

// ============================================================================
// ALIGNMENT
// ============================================================================

#[test]
fn test_justify_items() {
    let layout = GridLayout::new();
    assert_eq!(layout.justify_items(), ItemAlignment::Stretch);

    layout.set_justify_items(Some(ItemAlignment::Center));
    assert_eq!(layout.justify_items(), ItemAlignment::Center);
    assert_eq!(
        layout.root_element().style("justify-items").as_deref(),
        Some("center")
    );

    layout.set_justify_items(None);
    assert_eq!(layout.justify_items(), ItemAlignment::Stretch);
    assert_eq!(layout.root_element().style("justify-items"), None);
}

#[test]
fn test_align_items() {
    let layout = GridLayout::new();
    assert_eq!(layout.align_items(), ItemAlignment::Stretch);
    layout.set_align_items(Some(ItemAlignment::End));
    assert_eq!(layout.align_items(), ItemAlignment::End);
    layout.set_align_items(None);
    assert_eq!(layout.align_items(), ItemAlignment::Stretch);
}

#[test]
fn test_justify_content() {
    let layout = GridLayout::new();
    assert_eq!(layout.justify_content(), ContentAlignment::Normal);
    layout.set_justify_content(Some(ContentAlignment::SpaceBetween));
    assert_eq!(layout.justify_content(), ContentAlignment::SpaceBetween);
    layout.set_justify_content(None);
    assert_eq!(layout.justify_content(), ContentAlignment::Normal);
}

#[test]
fn test_align_content() {
    let layout = GridLayout::new();
    assert_eq!(layout.align_content(), ContentAlignment::Normal);
    layout.set_align_content(Some(ContentAlignment::SpaceAround));
    assert_eq!(layout.align_content(), ContentAlignment::SpaceAround);
    layout.set_align_content(None);
    assert_eq!(layout.align_content(), ContentAlignment::Normal);
}

#[test]
fn test_unrecognised_stored_keyword_reads_as_default() {
    let layout = GridLayout::new();
    layout.root_element().set_style("align-items", "flex-start");
    assert_eq!(layout.align_items(), ItemAlignment::Stretch);

    layout.root_element().set_style("justify-content", "left");
    assert_eq!(layout.justify_content(), ContentAlignment::Normal);
}

// ============================================================================
// AUTO FLOW
// ============================================================================

#[test]
fn test_auto_flow() {
    let layout = GridLayout::new();
    assert_eq!(layout.auto_flow(), AutoFlow::Row);

    layout.set_auto_flow(Some(AutoFlow::ColumnDense));
    assert_eq!(layout.auto_flow(), AutoFlow::ColumnDense);
    assert_eq!(
        layout.root_element().style("grid-auto-flow").as_deref(),
        Some("column dense")
    );

    layout.set_auto_flow(None);
    assert_eq!(layout.auto_flow(), AutoFlow::Row);
}

#[test]
fn test_auto_rows_and_columns() {
    let layout = GridLayout::new();
    layout.set_auto_rows(Some("minmax(100px, auto)"));
    layout.set_auto_columns(Some("1fr"));
    assert_eq!(layout.auto_rows().as_deref(), Some("minmax(100px, auto)"));
    assert_eq!(layout.auto_columns().as_deref(), Some("1fr"));

    layout.set_auto_rows(None);
    layout.set_auto_columns(None);
    assert_eq!(layout.auto_rows(), None);
    assert_eq!(layout.auto_columns(), None);
}

// ============================================================================
// WRAP
// ============================================================================

#[test]
fn test_set_wrap_is_unsupported() {
    let layout = GridLayout::new();
    for wrap in [true, false] {
        let err = layout.set_wrap(wrap).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
        assert!(err.to_string().contains("repeat(auto-fill"));
    }
    assert!(!layout.is_wrap());
}

#[test]
fn test_is_wrap_ignores_style() {
    let layout = GridLayout::new();
    layout.root_element().set_style("flex-wrap", "wrap");
    assert!(!layout.is_wrap());
}
