//! Theme variants on a grid write inline `gap`, `padding` and `margin`.

use gridcss::GridLayoutVariant;
use gridlayout::{Component, GridLayout, HasThemeVariant, ThemableLayout};

const SPACE_XS: &str = "var(--lumo-space-xs, 0.25rem)";
const SPACE_S: &str = "var(--lumo-space-s, 0.5rem)";
const SPACE_M: &str = "var(--lumo-space-m, 1rem)";
const SPACE_L: &str = "var(--lumo-space-l, 1.5rem)";
const SPACE_XL: &str = "var(--lumo-space-xl, 2.5rem)";

#[test]
fn test_spacing_variants_set_gap() {
    let cases = [
        (GridLayoutVariant::LumoSpacingXs, SPACE_XS),
        (GridLayoutVariant::LumoSpacingS, SPACE_S),
        (GridLayoutVariant::LumoSpacing, SPACE_M),
        (GridLayoutVariant::LumoSpacingL, SPACE_L),
        (GridLayoutVariant::LumoSpacingXl, SPACE_XL),
        (GridLayoutVariant::AuraSpacing, SPACE_M),
    ];
    for (variant, gap) in cases {
        let layout = GridLayout::new();
        layout.add_theme_variants(&[variant]);
        assert_eq!(layout.gap().as_deref(), Some(gap), "{variant:?}");
    }
}

#[test]
fn test_padding_and_margin_variants() {
    let layout = GridLayout::new();
    layout.add_theme_variants(&[GridLayoutVariant::LumoPadding, GridLayoutVariant::AuraMargin]);

    let element = layout.root_element();
    assert_eq!(element.style("padding").as_deref(), Some(SPACE_M));
    assert_eq!(element.style("margin").as_deref(), Some(SPACE_M));
    assert_eq!(layout.gap(), None);
}

#[test]
fn test_theme_names_are_recorded() {
    let layout = GridLayout::new();
    layout.add_theme_variants(&[GridLayoutVariant::LumoSpacingS, GridLayoutVariant::LumoPadding]);
    assert_eq!(layout.theme_names(), ["spacing-s", "padding"]);
}

#[test]
fn test_smallest_spacing_wins_when_several_are_present() {
    let layout = GridLayout::new();
    layout.add_theme_variants(&[GridLayoutVariant::LumoSpacingXl]);
    layout.add_theme_variants(&[GridLayoutVariant::LumoSpacingS]);
    assert_eq!(layout.gap().as_deref(), Some(SPACE_S));

    layout.remove_theme_variants(&[GridLayoutVariant::LumoSpacingS]);
    assert_eq!(layout.gap().as_deref(), Some(SPACE_XL));
}

#[test]
fn test_removing_last_variant_removes_styles() {
    let layout = GridLayout::new();
    let variants = [GridLayoutVariant::LumoSpacing, GridLayoutVariant::LumoPadding];
    layout.add_theme_variants(&variants);
    layout.remove_theme_variants(&variants);

    assert_eq!(layout.gap(), None);
    assert_eq!(layout.root_element().style("padding"), None);
    assert!(layout.theme_names().is_empty());
}

#[test]
fn test_variant_change_overrides_explicit_gap() {
    let layout = GridLayout::new();
    layout.set_gap(Some("10px"));
    layout.add_theme_variants(&[GridLayoutVariant::LumoSpacingL]);
    assert_eq!(layout.gap().as_deref(), Some(SPACE_L));

    layout.set_gap(Some("10px"));
    layout.add_theme_variants(&[GridLayoutVariant::LumoMargin]);
    assert_eq!(layout.gap().as_deref(), Some(SPACE_L));
}

#[test]
fn test_unrelated_variant_change_clears_explicit_gap() {
    let layout = GridLayout::new();
    layout.set_gap(Some("10px"));
    layout.add_theme_variants(&[GridLayoutVariant::LumoPadding]);
    assert_eq!(layout.gap(), None);
}

// ============================================================================
// THEMABLE LAYOUT TOGGLES
// ============================================================================

#[test]
fn test_set_spacing_toggle() {
    let layout = GridLayout::new();
    assert!(!layout.is_spacing());

    layout.set_spacing(true);
    assert!(layout.is_spacing());
    assert_eq!(layout.gap().as_deref(), Some(SPACE_M));

    layout.set_spacing(false);
    assert!(!layout.is_spacing());
    assert_eq!(layout.gap(), None);
}

#[test]
fn test_set_padding_and_margin_toggles() {
    let layout = GridLayout::new();
    layout.set_padding(true);
    layout.set_margin(true);
    assert!(layout.is_padding());
    assert!(layout.is_margin());
    assert_eq!(layout.root_element().style("margin").as_deref(), Some(SPACE_M));

    layout.set_margin(false);
    assert!(!layout.is_margin());
    assert_eq!(layout.root_element().style("margin"), None);
    assert_eq!(layout.root_element().style("padding").as_deref(), Some(SPACE_M));
}

#[test]
fn test_aura_variant_is_seen_by_toggle_getters() {
    let layout = GridLayout::new();
    layout.add_theme_variants(&[GridLayoutVariant::AuraSpacing]);
    assert!(layout.is_spacing());
}
