//! Plural rule formula parser.
//!
//! This module turns gettext `plural=` formulas and complete `Plural-Forms`
//! header values into expression trees. The tree types are public so other
//! tools can build or inspect rules without going through the text syntax.

pub mod ast;
pub mod error;
mod formula;
mod header;
mod options;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use error::{HeaderError, ParseError};
pub use formula::{parse_formula, parse_formula_with};
pub use header::{parse_plural_forms, parse_plural_forms_with};
pub use options::ParseOptions;
