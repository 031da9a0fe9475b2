//! Alignment and auto-flow keywords.
//!
//! Each enum maps one-to-one onto a fixed set of CSS keywords:
//!
//! - [`ItemAlignment`]: `justify-items`, `align-items`
//! - [`SelfAlignment`]: `justify-self`, `align-self`
//! - [`ContentAlignment`]: `justify-content`, `align-content`
//! - [`AutoFlow`]: `grid-auto-flow`
//!
//! None of them implements `Default`. Readers pass the fallback explicitly
//! to [`CssKeyword::from_css_value`], so the default for each property is
//! visible where the property is read.

use std::fmt;
use std::str::FromStr;

use crate::error::GridCssError;

/// A closed set of values with a fixed CSS keyword each.
pub trait CssKeyword: Sized + Copy + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The CSS keyword for this value.
    fn css_value(&self) -> &'static str;

    /// Exact keyword lookup.
    fn lookup(value: &str) -> Option<Self>;

    /// Map a stored keyword back to a value.
    ///
    /// Absent and unrecognised keywords both yield `default`.
    fn from_css_value(value: Option<&str>, default: Self) -> Self {
        value.and_then(Self::lookup).unwrap_or(default)
    }
}

macro_rules! css_keywords {
    (
        $(#[$meta:meta])*
        $name:ident, $table:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $css:tt ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        static $table: phf::Map<&'static str, $name> = phf::phf_map! {
            $( $css => $name::$variant ),+
        };

        impl CssKeyword for $name {
            const ALL: &'static [Self] = &[$( $name::$variant ),+];

            fn css_value(&self) -> &'static str {
                match self {
                    $( $name::$variant => $css ),+
                }
            }

            fn lookup(value: &str) -> Option<Self> {
                $table.get(value).copied()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.css_value())
            }
        }

        impl FromStr for $name {
            type Err = GridCssError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::lookup(s.trim()).ok_or_else(|| {
                    GridCssError::InvalidSyntax(format!(
                        "unknown {} keyword '{}'",
                        stringify!($name),
                        s
                    ))
                })
            }
        }
    };
}

css_keywords! {
    /// Default alignment of items inside their cells (`justify-items`, `align-items`).
    ///
    /// Reads fall back to `Stretch`.
    ItemAlignment, ITEM_ALIGNMENT {
        Start => "start",
        End => "end",
        Center => "center",
        /// Fill the cell.
        Stretch => "stretch",
        Baseline => "baseline",
    }
}

css_keywords! {
    /// Alignment of a single item, overriding the container's item alignment.
    ///
    /// Reads fall back to `Auto`, which defers to the container.
    SelfAlignment, SELF_ALIGNMENT {
        Auto => "auto",
        Start => "start",
        End => "end",
        Center => "center",
        Stretch => "stretch",
        Baseline => "baseline",
    }
}

css_keywords! {
    /// Distribution of the tracks inside the container (`justify-content`, `align-content`).
    ///
    /// Reads fall back to `Normal`.
    ContentAlignment, CONTENT_ALIGNMENT {
        Normal => "normal",
        Start => "start",
        End => "end",
        Center => "center",
        Stretch => "stretch",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
    }
}

css_keywords! {
    /// Direction auto-placed items flow in (`grid-auto-flow`).
    ///
    /// The dense forms backfill holes left by earlier spanning items.
    /// Reads fall back to `Row`.
    AutoFlow, AUTO_FLOW {
        Row => "row",
        Column => "column",
        RowDense => "row dense",
        ColumnDense => "column dense",
    }
}
