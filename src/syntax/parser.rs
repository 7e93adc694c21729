//! Strict shape parser.
//!
//! Recognises `x p y q z` exactly, with `x`, `y` and `z` runs of hyphens, and
//! reports the first offending position as a diagnostic.

use pest::{
    error::{Error, ErrorVariant, InputLocation},
    Parser,
};
use pest_derive::Parser;

use crate::errors::PqError;

#[derive(Parser)]
#[grammar = "syntax/grammar.pest"]
struct ShapeParser;

/// The three hyphen runs of a well-formed strict string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub before: usize,
    pub between: usize,
    pub after: usize,
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parses `input` against the strict grammar.
pub fn parse_shape(input: &str) -> Result<Shape, PqError> {
    let pairs =
        ShapeParser::parse(Rule::shape, input).map_err(|e| convert_parse_error(e, input))?;

    // hyphen runs are ASCII, so byte length is the hyphen count
    let runs: Vec<usize> = pairs
        .flat_map(|shape| shape.into_inner())
        .filter(|pair| pair.as_rule() == Rule::hyphens)
        .map(|pair| pair.as_str().len())
        .collect();

    match runs.as_slice() {
        [before, between, after] => Ok(Shape {
            before: *before,
            between: *between,
            after: *after,
        }),
        _ => Err(PqError::malformed(input, 0, "three runs of hyphens")),
    }
}

// ============================================================================
// ERROR CONVERSION
// ============================================================================

fn convert_parse_error(error: Error<Rule>, input: &str) -> PqError {
    let offset = match error.location {
        InputLocation::Pos(pos) => pos,
        InputLocation::Span((start, _)) => start,
    };

    let expected = match &error.variant {
        ErrorVariant::ParsingError { positives, .. } if !positives.is_empty() => positives
            .iter()
            .map(describe_rule)
            .collect::<Vec<_>>()
            .join(" or "),
        ErrorVariant::CustomError { message } => message.clone(),
        _ => "a pq string".to_string(),
    };

    PqError::malformed(input, offset, expected)
}

fn describe_rule(rule: &Rule) -> String {
    match rule {
        Rule::p_marker => "`p`".to_string(),
        Rule::q_marker => "`q`".to_string(),
        Rule::hyphens => "`-`".to_string(),
        Rule::EOI => "end of input".to_string(),
        other => format!("{:?}", other),
    }
}
