//! Parse error types for plural rule formulas.

use thiserror::Error;

use crate::rule::RuleError;

/// An error that occurred while parsing a formula.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Parentheses, negations or operator chains nested past the limit.
    #[error("formula nesting exceeds the maximum depth of {max_depth}")]
    NestingTooDeep { max_depth: usize },
}

/// An error that occurred while reading a `Plural-Forms` header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// The header or its formula is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The header parsed but does not describe a valid rule.
    #[error("invalid plural rule: {0}")]
    Rule(#[from] RuleError),
}
