//! Error types and diagnostic reporting.
//!
//! This module defines:
//!
//! - Error structures with source position information
//! - The exact messages the parser reports for malformed expressions
//! - The `Reporter` sink the parser reports into, plus two ready-made sinks
//! - Error tips used when rendering a caret snippet

pub mod errors;

#[cfg(test)]
mod tests;
