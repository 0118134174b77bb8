//! Parser configuration.

use bon::Builder;

/// Limits applied while parsing formulas.
///
/// Evaluation recurses once per tree level, so bounding nesting at parse time
/// also bounds the stack used when the rule is evaluated.
///
/// # Example
///
/// ```
/// use plural_rule::{ParseOptions, parse_formula_with};
///
/// let options = ParseOptions::builder().max_depth(4).build();
/// assert!(parse_formula_with("n != 1", &options).is_ok());
/// assert!(parse_formula_with("((((((n))))))", &options).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ParseOptions {
    /// Maximum nesting depth of parentheses, negations and conditionals.
    ///
    /// Every operator in a chain such as `n + 1 + 1` also counts as one
    /// level, so a flat chain of more than `max_depth` operators is rejected
    /// even though its tree is no deeper than that.
    #[builder(default = 64)]
    max_depth: usize,
}

impl ParseOptions {
    /// Maximum nesting depth accepted by the parser.
    ///
    /// Operators in a flat chain count one level each, so `n` followed by
    /// more than `max_depth` `+ 1` terms is rejected.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
