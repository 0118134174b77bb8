pub mod parser;
pub mod rule;

pub use parser::{
    BinaryOp, Expr, HeaderError, ParseError, ParseOptions, UnaryOp, parse_formula,
    parse_formula_with, parse_plural_forms, parse_plural_forms_with,
};
pub use rule::{EvalError, PluralRule, RuleError, eval_expr};
