//! Syntax of the strict pq grammar and diagnostics for rejected inputs.

pub mod parser;
pub mod validator;

pub use parser::{parse_shape, Shape};
pub use validator::diagnose;
