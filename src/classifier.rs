//! # Classifier
//!
//! Decides membership in the pq-system. A single left-to-right scan splits the
//! input into three regions around the `p` and `q` markers and counts the
//! hyphens in each; the axiom and theorem predicates are pure arithmetic over
//! those counts.
//!
//! The pq-system (Gödel, Escher, Bach, ch. 2):
//! - axiom schema: `xp-qx-` whenever `x` is a run of hyphens;
//! - production rule: if `xpyqz` is a theorem then so is `xpy-qz-`.
//!
//! ## Invariants
//! - Never fails and never panics: invalid input is a normal result.
//! - An invalid scan is never axiom or theorem.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::syntax::{self, Shape};

/// Which part of the input the scan is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    BeforeMarker,
    Between,
    AfterMarker,
}

/// A recognised character of the pq alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    P,
    Q,
    Hyphen,
}

impl Token {
    /// Maps a character onto the alphabet. Markers are case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'p' | 'P' => Some(Token::P),
            'q' | 'Q' => Some(Token::Q),
            '-' => Some(Token::Hyphen),
            _ => None,
        }
    }
}

/// Which grammar to classify against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// The literal scan: any sequence of markers and hyphens is well formed,
    /// a repeated marker simply reassigns the current region.
    #[default]
    Permissive,
    /// Exactly `-* p -* q -*`, judged against the textbook axiom schema.
    Strict,
}

/// In-progress state of one scan. Owned by a single classification pass.
#[derive(Debug, Clone)]
pub struct ScanState<'a> {
    input: &'a str,
    region: Region,
    before: usize,
    between: usize,
    after: usize,
    valid: bool,
}

impl<'a> ScanState<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            region: Region::default(),
            before: 0,
            between: 0,
            after: 0,
            valid: false,
        }
    }

    /// Consumes the whole input, stopping at the first unknown character.
    pub fn scan(mut self) -> Self {
        for c in self.input.chars() {
            match Token::from_char(c) {
                Some(Token::Hyphen) => match self.region {
                    Region::BeforeMarker => self.before += 1,
                    Region::Between => self.between += 1,
                    Region::AfterMarker => self.after += 1,
                },
                Some(Token::P) => self.region = Region::Between,
                Some(Token::Q) => self.region = Region::AfterMarker,
                None => {
                    self.valid = false;
                    return self;
                }
            }
        }
        self.valid = true;
        self
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Hyphen counts as `(before, between, after)`.
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.before, self.between, self.after)
    }

    pub fn is_axiom(&self) -> bool {
        self.valid && self.before + 1 == self.after
    }

    pub fn is_theorem(&self) -> bool {
        // all axioms are theorems
        if self.is_axiom() {
            return true;
        }
        // the empty string balances trivially but is not derivable
        self.valid && !self.input.is_empty() && self.before + self.between == self.after
    }

    /// Freezes the scan into its result record.
    pub fn finish(self) -> ClassificationResult {
        ClassificationResult {
            input: self.input.to_string(),
            valid: self.valid,
            is_axiom: self.is_axiom(),
            is_theorem: self.is_theorem(),
        }
    }
}

/// The outcome of classifying one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub input: String,
    pub valid: bool,
    #[serde(rename = "axiom")]
    pub is_axiom: bool,
    #[serde(rename = "theorem")]
    pub is_theorem: bool,
}

impl ClassificationResult {
    fn invalid(input: &str) -> Self {
        Self {
            input: input.to_string(),
            valid: false,
            is_axiom: false,
            is_theorem: false,
        }
    }

    fn from_shape(input: &str, shape: Shape) -> Self {
        let derivable = shape.between >= 1 && shape.before + shape.between == shape.after;
        Self {
            input: input.to_string(),
            valid: true,
            is_axiom: derivable && shape.between == 1,
            is_theorem: derivable,
        }
    }
}

/// Classifies `input` under the permissive grammar.
pub fn classify(input: &str) -> ClassificationResult {
    classify_with(input, Grammar::Permissive)
}

/// Classifies `input` under the given grammar.
pub fn classify_with(input: &str, grammar: Grammar) -> ClassificationResult {
    let result = match grammar {
        Grammar::Permissive => ScanState::new(input).scan().finish(),
        Grammar::Strict => match syntax::parse_shape(input) {
            Ok(shape) => ClassificationResult::from_shape(input, shape),
            Err(_) => ClassificationResult::invalid(input),
        },
    };
    trace!(
        "classified {:?} ({:?}): valid={} axiom={} theorem={}",
        input,
        grammar,
        result.valid,
        result.is_axiom,
        result.is_theorem
    );
    result
}

/// Classifies every input independently, preserving order.
pub fn classify_all<I, S>(inputs: I, grammar: Grammar) -> Vec<ClassificationResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|input| classify_with(input.as_ref(), grammar))
        .collect()
}
