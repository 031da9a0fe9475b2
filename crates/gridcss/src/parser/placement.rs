//! Grid-line shorthand parsing.
//!
//! Recognises exactly the forms the serializer writes, with any amount of
//! whitespace around the `/`:
//!
//! - `<start>`
//! - `<start> / span <n>`
//! - `span <n>`
//! - `<start> / <end>`
//! - `auto / <end>`
//!
//! Named lines, negative indices and `span` with an end line are not
//! accepted.

use crate::error::{GridCssError, Result};
use crate::types::position::GridLine;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{all_consuming, map, map_res, opt, verify},
    sequence::{delimited, pair, preceded},
};

/// What follows the `/` after a start line.
enum Tail {
    Span(u32),
    End(u32),
}

/// Parse a 1-based line number or track count.
fn line_number(input: &str) -> IResult<&str, u32> {
    verify(map_res(digit1, |s: &str| s.parse::<u32>()), |n: &u32| *n >= 1)(input)
}

fn slash(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char('/'), multispace0)(input)
}

/// Parse `span <n>`.
fn span(input: &str) -> IResult<&str, u32> {
    preceded(pair(tag("span"), multispace1), line_number)(input)
}

fn tail(input: &str) -> IResult<&str, Tail> {
    preceded(
        slash,
        alt((map(span, Tail::Span), map(line_number, Tail::End))),
    )(input)
}

fn grid_line(input: &str) -> IResult<&str, GridLine> {
    alt((
        map(span, |span| GridLine {
            span: Some(span),
            ..GridLine::default()
        }),
        map(preceded(pair(tag("auto"), slash), line_number), |end| {
            GridLine {
                end: Some(end),
                ..GridLine::default()
            }
        }),
        map(pair(line_number, opt(tail)), |(start, tail)| {
            let mut line = GridLine {
                start: Some(start),
                ..GridLine::default()
            };
            match tail {
                Some(Tail::Span(n)) => line.span = Some(n),
                Some(Tail::End(n)) => line.end = Some(n),
                None => {}
            }
            line
        }),
    ))(input)
}

/// Parse a complete `grid-column` or `grid-row` value.
///
/// The whole input must match; surrounding whitespace is ignored.
pub fn parse_grid_line(input: &str) -> Result<GridLine> {
    all_consuming(delimited(multispace0, grid_line, multispace0))(input)
        .map(|(_, line)| line)
        .map_err(|_| GridCssError::InvalidSyntax(format!("unrecognised grid line '{input}'")))
}
