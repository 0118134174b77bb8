//! Plural rule evaluation.
//!
//! A [`PluralRule`] pairs the number of plural forms a catalog declares with
//! the expression tree that picks one of them. Evaluation is a pure function
//! of the rule and the input number, so a single rule can be shared freely
//! between threads.

mod error;
mod evaluator;
mod plural_rule;

pub use error::{EvalError, RuleError};
pub use evaluator::eval_expr;
pub use plural_rule::PluralRule;
