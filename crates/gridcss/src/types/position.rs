//! Grid item placement.
//!
//! A [`GridPosition`] describes where a child sits in its grid: a start line,
//! a span or an end line on each axis. Lines are 1-based, following CSS Grid
//! (line 1 is before the first track).
//!
//! ## CSS Syntax
//!
//! ```css
//! .child {
//!     grid-column: 2 / span 2;   /* start at line 2, cover 2 tracks */
//!     grid-row: auto / 4;        /* auto-placed, end at line 4 */
//! }
//! ```
//!
//! Positions are built through [`GridPositionBuilder`], which validates each
//! field as it is set. Once built a position never changes.

use std::fmt;

use crate::error::{GridCssError, Result};
use crate::parser::parse_grid_line;

/// Placement along one axis: start line, span and end line.
///
/// At most one of `span` and `end` is set. Every present value is `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridLine {
    /// Line the item starts at.
    pub start: Option<u32>,
    /// Number of tracks the item covers.
    pub span: Option<u32>,
    /// Line the item ends at.
    pub end: Option<u32>,
}

impl GridLine {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.span.is_none() && self.end.is_none()
    }

    /// Serialize to `grid-column` / `grid-row` shorthand.
    ///
    /// Returns `None` for an empty line; the property should then be removed
    /// rather than written.
    pub fn to_css(&self) -> Option<String> {
        let value = match (self.start, self.span, self.end) {
            (None, None, None) => return None,
            (Some(start), Some(span), _) => format!("{start} / span {span}"),
            (None, Some(span), _) => format!("span {span}"),
            (Some(start), None, Some(end)) => format!("{start} / {end}"),
            (None, None, Some(end)) => format!("auto / {end}"),
            (Some(start), None, None) => start.to_string(),
        };
        Some(value)
    }
}

/// Immutable placement of a grid child.
///
/// Equality and hashing cover all six fields.
///
/// # Examples
///
/// ```rust
/// use gridcss::GridPosition;
///
/// let position = GridPosition::at(2, 3)?;
/// assert_eq!(position.column(), Some(2));
/// assert_eq!(position.row(), Some(3));
/// assert_eq!(position.column_span(), None);
/// # Ok::<(), gridcss::GridCssError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPosition {
    column: GridLine,
    row: GridLine,
}

impl GridPosition {
    /// Start building a position with every field absent.
    pub fn builder() -> GridPositionBuilder {
        GridPositionBuilder::default()
    }

    /// Position with only a column and a row.
    pub fn at(column: i32, row: i32) -> Result<Self> {
        Ok(Self::builder().column(column)?.row(row)?.build())
    }

    /// Position with a column, a row and a span on each axis.
    pub fn spanning(column: i32, row: i32, column_span: i32, row_span: i32) -> Result<Self> {
        Ok(Self::builder()
            .column(column)?
            .row(row)?
            .column_span(column_span)?
            .row_span(row_span)?
            .build())
    }

    /// Rebuild a position from stored `grid-column` and `grid-row` values.
    ///
    /// Accepts the forms produced by [`column_value`](Self::column_value).
    /// A missing value leaves that axis empty. Parsed lines go through the
    /// builder, so the result obeys the same rules as a built position.
    pub fn from_css(column: Option<&str>, row: Option<&str>) -> Result<Self> {
        let column = column.map(parse_grid_line).transpose()?.unwrap_or_default();
        let row = row.map(parse_grid_line).transpose()?.unwrap_or_default();

        let mut builder = Self::builder();
        if let Some(start) = column.start {
            builder = builder.column(line_arg(start)?)?;
        }
        if let Some(span) = column.span {
            builder = builder.column_span(line_arg(span)?)?;
        }
        if let Some(end) = column.end {
            builder = builder.column_end(line_arg(end)?)?;
        }
        if let Some(start) = row.start {
            builder = builder.row(line_arg(start)?)?;
        }
        if let Some(span) = row.span {
            builder = builder.row_span(line_arg(span)?)?;
        }
        if let Some(end) = row.end {
            builder = builder.row_end(line_arg(end)?)?;
        }
        Ok(builder.build())
    }

    pub fn column(&self) -> Option<u32> {
        self.column.start
    }

    pub fn row(&self) -> Option<u32> {
        self.row.start
    }

    pub fn column_span(&self) -> Option<u32> {
        self.column.span
    }

    pub fn row_span(&self) -> Option<u32> {
        self.row.span
    }

    pub fn column_end(&self) -> Option<u32> {
        self.column.end
    }

    pub fn row_end(&self) -> Option<u32> {
        self.row.end
    }

    /// Column axis placement.
    pub fn column_line(&self) -> GridLine {
        self.column
    }

    /// Row axis placement.
    pub fn row_line(&self) -> GridLine {
        self.row
    }

    /// True when neither axis has anything set.
    pub fn is_empty(&self) -> bool {
        self.column.is_empty() && self.row.is_empty()
    }

    /// Value for the `grid-column` property, or `None` if the column axis is empty.
    pub fn column_value(&self) -> Option<String> {
        self.column.to_css()
    }

    /// Value for the `grid-row` property, or `None` if the row axis is empty.
    pub fn row_value(&self) -> Option<String> {
        self.row.to_css()
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("column", self.column.start),
            ("row", self.row.start),
            ("column_span", self.column.span),
            ("row_span", self.row.span),
            ("column_end", self.column.end),
            ("row_end", self.row.end),
        ];

        write!(f, "GridPosition {{ ")?;
        for (i, (name, value)) in fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                Some(v) => write!(f, "{name}: {v}")?,
                None => write!(f, "{name}: -")?,
            }
        }
        write!(f, " }}")
    }
}

/// Builder for [`GridPosition`].
///
/// Every setter validates its input immediately and hands the builder back
/// inside a `Result`, so chains use `?`:
///
/// ```rust
/// use gridcss::{GridCssError, GridPosition};
///
/// let err = GridPosition::builder()
///     .column_span(2)?
///     .column_end(4)
///     .unwrap_err();
/// assert!(matches!(err, GridCssError::ConflictingState { .. }));
/// # Ok::<(), GridCssError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridPositionBuilder {
    column: GridLine,
    row: GridLine,
}

impl GridPositionBuilder {
    pub fn column(mut self, column: i32) -> Result<Self> {
        self.column.start = Some(positive("column", column)?);
        Ok(self)
    }

    pub fn row(mut self, row: i32) -> Result<Self> {
        self.row.start = Some(positive("row", row)?);
        Ok(self)
    }

    /// Fails with `ConflictingState` if a column end is already set.
    pub fn column_span(mut self, span: i32) -> Result<Self> {
        let span = positive("column span", span)?;
        if self.column.end.is_some() {
            return Err(conflict("column span", "column end"));
        }
        self.column.span = Some(span);
        Ok(self)
    }

    /// Fails with `ConflictingState` if a row end is already set.
    pub fn row_span(mut self, span: i32) -> Result<Self> {
        let span = positive("row span", span)?;
        if self.row.end.is_some() {
            return Err(conflict("row span", "row end"));
        }
        self.row.span = Some(span);
        Ok(self)
    }

    /// Fails with `ConflictingState` if a column span is already set.
    pub fn column_end(mut self, end: i32) -> Result<Self> {
        let end = positive("column end", end)?;
        if self.column.span.is_some() {
            return Err(conflict("column end", "column span"));
        }
        self.column.end = Some(end);
        Ok(self)
    }

    /// Fails with `ConflictingState` if a row span is already set.
    pub fn row_end(mut self, end: i32) -> Result<Self> {
        let end = positive("row end", end)?;
        if self.row.span.is_some() {
            return Err(conflict("row end", "row span"));
        }
        self.row.end = Some(end);
        Ok(self)
    }

    pub fn build(self) -> GridPosition {
        GridPosition {
            column: self.column,
            row: self.row,
        }
    }
}

fn positive(name: &'static str, value: i32) -> Result<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v >= 1)
        .ok_or(GridCssError::InvalidArgument { name, value })
}

/// Parsed line numbers are unsigned; the builder takes `i32`.
fn line_arg(value: u32) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| GridCssError::InvalidSyntax(format!("grid line {value} is out of range")))
}

fn conflict(set: &'static str, existing: &'static str) -> GridCssError {
    GridCssError::ConflictingState { set, existing }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_has_no_css() {
        assert_eq!(GridLine::default().to_css(), None);
    }

    #[test]
    fn test_span_takes_precedence_over_end() {
        // Not reachable through the builder, but the serializer must not
        // emit both.
        let line = GridLine {
            start: Some(1),
            span: Some(2),
            end: Some(5),
        };
        assert_eq!(line.to_css().as_deref(), Some("1 / span 2"));
    }

    #[test]
    fn test_positive_rejects_zero_and_negative() {
        assert!(positive("column", 0).is_err());
        assert!(positive("column", -3).is_err());
        assert_eq!(positive("column", 7), Ok(7));
    }

    #[test]
    fn test_numeric_check_runs_before_conflict_check() {
        let builder = GridPosition::builder().column_end(3).unwrap();
        let err = builder.column_span(0).unwrap_err();
        assert_eq!(
            err,
            GridCssError::InvalidArgument {
                name: "column span",
                value: 0
            }
        );
    }

    #[test]
    fn test_from_css_rejects_lines_beyond_builder_range() {
        let err = GridPosition::from_css(Some("2147483648"), None).unwrap_err();
        assert!(matches!(err, GridCssError::InvalidSyntax(_)));

        let position =
            GridPosition::from_css(Some("2147483647 / span 2"), Some("auto / 3")).unwrap();
        assert_eq!(position.column(), Some(2147483647));
        assert_eq!(position.column_span(), Some(2));
        assert_eq!(position.row_end(), Some(3));
        assert_eq!(position.row(), None);
    }

    #[test]
    fn test_display_lists_every_field() {
        let position = GridPosition::builder()
            .column(1)
            .unwrap()
            .row_end(3)
            .unwrap()
            .build();
        assert_eq!(
            position.to_string(),
            "GridPosition { column: 1, row: -, column_span: -, row_span: -, column_end: -, row_end: 3 }"
        );
    }
}
