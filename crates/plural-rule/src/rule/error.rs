//! Error types for building and evaluating plural rules.

use thiserror::Error;

use crate::parser::BinaryOp;

/// Errors that occur while constructing a [`PluralRule`](super::PluralRule).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The number of plural forms must be at least one.
    #[error("plural count must be positive, got {count}")]
    InvalidPluralCount { count: i64 },

    /// No expression tree was supplied.
    #[error("plural rule has no expression tree")]
    MissingRoot,
}

/// An error that occurred while evaluating a rule against a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The right operand of `/` or `%` evaluated to zero.
    #[error("division by zero in '{op}' operation")]
    DivisionByZero { op: BinaryOp },

    /// A checked evaluation produced an index with no matching plural form.
    #[error("plural index {index} is out of range for {plural_count} plural forms")]
    IndexOutOfRange { index: i64, plural_count: usize },
}
