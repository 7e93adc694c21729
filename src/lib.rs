//! pqs: a decision procedure for the pq-system of Gödel, Escher, Bach.
//!
//! ```
//! let result = pqs::classify("--p-q---");
//! assert!(result.valid && result.is_axiom && result.is_theorem);
//! ```

pub use crate::classifier::{classify, classify_all, classify_with, ClassificationResult, Grammar};
pub use crate::errors::PqError;

pub mod classifier;
pub mod cli;
pub mod errors;
pub mod syntax;
