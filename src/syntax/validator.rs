//! # Validator
//!
//! Explains rejected inputs. Classification only answers *whether* an input
//! is valid; `diagnose` says where and why, as a `miette` diagnostic.

use crate::classifier::{Grammar, Token};
use crate::errors::PqError;
use crate::syntax::parse_shape;

/// Returns a diagnostic for an invalid input, or `None` when it is valid.
pub fn diagnose(input: &str, grammar: Grammar) -> Option<PqError> {
    match grammar {
        Grammar::Permissive => first_unknown_symbol(input)
            .map(|(offset, found)| PqError::unknown_symbol(input, offset, found)),
        Grammar::Strict => match first_unknown_symbol(input) {
            // the alphabet check gives the sharper message
            Some((offset, found)) => Some(PqError::unknown_symbol(input, offset, found)),
            None => parse_shape(input).err(),
        },
    }
}

fn first_unknown_symbol(input: &str) -> Option<(usize, char)> {
    input
        .char_indices()
        .find(|(_, c)| Token::from_char(*c).is_none())
}
