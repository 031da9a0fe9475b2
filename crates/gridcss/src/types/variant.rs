//! Theme variants and the inline styles they imply.
//!
//! A grid container can carry theme names such as `spacing-s` or `padding`.
//! Unlike ordered layouts, which style these through the theme stylesheet,
//! the grid writes them as inline `gap`, `padding` and `margin` values so
//! they apply to `display: grid` regardless of the stylesheet in use.
//!
//! | Theme name   | Property  | Value                            |
//! |--------------|-----------|----------------------------------|
//! | `spacing-xs` | `gap`     | `var(--lumo-space-xs, 0.25rem)`  |
//! | `spacing-s`  | `gap`     | `var(--lumo-space-s, 0.5rem)`    |
//! | `spacing`    | `gap`     | `var(--lumo-space-m, 1rem)`      |
//! | `spacing-l`  | `gap`     | `var(--lumo-space-l, 1.5rem)`    |
//! | `spacing-xl` | `gap`     | `var(--lumo-space-xl, 2.5rem)`   |
//! | `padding`    | `padding` | `var(--lumo-space-m, 1rem)`      |
//! | `margin`     | `margin`  | `var(--lumo-space-m, 1rem)`      |
//!
//! When several spacing names are present the first row of the table wins.

use bitflags::bitflags;

/// Theme variants a grid layout accepts.
///
/// Lumo and Aura variants that share a theme name are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridLayoutVariant {
    LumoMargin,
    LumoPadding,
    LumoSpacingXs,
    LumoSpacingS,
    LumoSpacing,
    LumoSpacingL,
    LumoSpacingXl,
    AuraMargin,
    AuraPadding,
    AuraSpacing,
}

impl GridLayoutVariant {
    /// The theme name this variant adds to the element.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::LumoMargin | Self::AuraMargin => "margin",
            Self::LumoPadding | Self::AuraPadding => "padding",
            Self::LumoSpacingXs => "spacing-xs",
            Self::LumoSpacingS => "spacing-s",
            Self::LumoSpacing | Self::AuraSpacing => "spacing",
            Self::LumoSpacingL => "spacing-l",
            Self::LumoSpacingXl => "spacing-xl",
        }
    }

    pub fn theme_name(&self) -> ThemeNames {
        match self {
            Self::LumoMargin | Self::AuraMargin => ThemeNames::MARGIN,
            Self::LumoPadding | Self::AuraPadding => ThemeNames::PADDING,
            Self::LumoSpacingXs => ThemeNames::SPACING_XS,
            Self::LumoSpacingS => ThemeNames::SPACING_S,
            Self::LumoSpacing | Self::AuraSpacing => ThemeNames::SPACING,
            Self::LumoSpacingL => ThemeNames::SPACING_L,
            Self::LumoSpacingXl => ThemeNames::SPACING_XL,
        }
    }
}

bitflags! {
    /// The set of style-relevant theme names present on an element.
    ///
    /// # Example
    ///
    /// ```
    /// use gridcss::ThemeNames;
    ///
    /// let names: ThemeNames = ["spacing-s", "padding", "primary"]
    ///     .into_iter()
    ///     .collect();
    ///
    /// assert!(names.contains(ThemeNames::SPACING_S));
    /// assert!(names.contains(ThemeNames::PADDING));
    /// assert!(!names.contains(ThemeNames::MARGIN));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ThemeNames: u8 {
        const MARGIN = 1 << 0;
        const PADDING = 1 << 1;
        const SPACING_XS = 1 << 2;
        const SPACING_S = 1 << 3;
        const SPACING = 1 << 4;
        const SPACING_L = 1 << 5;
        const SPACING_XL = 1 << 6;
    }
}

impl ThemeNames {
    /// Flag for a raw theme name; names with no inline style are `None`.
    pub fn from_theme_name(name: &str) -> Option<Self> {
        match name {
            "margin" => Some(Self::MARGIN),
            "padding" => Some(Self::PADDING),
            "spacing-xs" => Some(Self::SPACING_XS),
            "spacing-s" => Some(Self::SPACING_S),
            "spacing" => Some(Self::SPACING),
            "spacing-l" => Some(Self::SPACING_L),
            "spacing-xl" => Some(Self::SPACING_XL),
            _ => None,
        }
    }
}

impl<'a> FromIterator<&'a str> for ThemeNames {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter()
            .filter_map(Self::from_theme_name)
            .fold(Self::empty(), |acc, flag| acc | flag)
    }
}

impl FromIterator<GridLayoutVariant> for ThemeNames {
    fn from_iter<I: IntoIterator<Item = GridLayoutVariant>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, variant| acc | variant.theme_name())
    }
}

const SPACE_M: &str = "var(--lumo-space-m, 1rem)";

/// Spacing names in priority order with the gap each one sets.
const GAP_PRIORITY: [(ThemeNames, &str); 5] = [
    (ThemeNames::SPACING_XS, "var(--lumo-space-xs, 0.25rem)"),
    (ThemeNames::SPACING_S, "var(--lumo-space-s, 0.5rem)"),
    (ThemeNames::SPACING, SPACE_M),
    (ThemeNames::SPACING_L, "var(--lumo-space-l, 1.5rem)"),
    (ThemeNames::SPACING_XL, "var(--lumo-space-xl, 2.5rem)"),
];

/// Inline styles derived from a set of theme names.
///
/// `None` means the property must be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivedStyles {
    pub gap: Option<&'static str>,
    pub padding: Option<&'static str>,
    pub margin: Option<&'static str>,
}

/// Compute the `gap`, `padding` and `margin` values for a set of theme names.
pub fn derive_styles(names: ThemeNames) -> DerivedStyles {
    let gap = GAP_PRIORITY
        .iter()
        .find(|(flag, _)| names.contains(*flag))
        .map(|(_, value)| *value);

    DerivedStyles {
        gap,
        padding: names.contains(ThemeNames::PADDING).then_some(SPACE_M),
        margin: names.contains(ThemeNames::MARGIN).then_some(SPACE_M),
    }
}
