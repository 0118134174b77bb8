//! The plural rule type.

use std::fmt;

use crate::parser::{BinaryOp, Expr};
use crate::rule::evaluator::eval_expr;
use crate::rule::{EvalError, RuleError};

/// A plural rule: the number of plural forms and the formula selecting one.
///
/// Rules are immutable once built. [`evaluate`](Self::evaluate) does not check
/// the result against [`plural_count`](Self::plural_count); callers that need
/// the bound enforced use [`evaluate_checked`](Self::evaluate_checked).
///
/// # Example
///
/// ```
/// use plural_rule::{PluralRule, parse_formula};
///
/// let root = parse_formula("n%10==1 && n%100!=11 ? 0 : n != 0 ? 1 : 2").unwrap();
/// let rule = PluralRule::new(3, root).unwrap();
/// assert_eq!(rule.evaluate(21).unwrap(), 0);
/// assert_eq!(rule.evaluate(11).unwrap(), 1);
/// assert_eq!(rule.evaluate(0).unwrap(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralRule {
    plural_count: usize,
    root: Expr,
}

impl PluralRule {
    /// Create a rule from a plural count and an expression tree.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPluralCount`] if `plural_count <= 0`.
    pub fn new(plural_count: i64, root: Expr) -> Result<Self, RuleError> {
        Self::try_new(plural_count, Some(root))
    }

    /// Create a rule from parts that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPluralCount`] if `plural_count <= 0` and
    /// [`RuleError::MissingRoot`] if `root` is `None`.
    pub fn try_new(plural_count: i64, root: Option<Expr>) -> Result<Self, RuleError> {
        let count = usize::try_from(plural_count)
            .ok()
            .filter(|&count| count > 0)
            .ok_or(RuleError::InvalidPluralCount {
                count: plural_count,
            })?;
        let root = root.ok_or(RuleError::MissingRoot)?;
        Ok(Self {
            plural_count: count,
            root,
        })
    }

    /// Number of plural forms this rule distinguishes.
    pub fn plural_count(&self) -> usize {
        self.plural_count
    }

    /// The formula's expression tree.
    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// Compute the plural form index for `n`.
    ///
    /// The formula is evaluated in 64-bit arithmetic and the result is
    /// truncated to `i32`. The index is returned as computed, even when it is
    /// negative or not below [`plural_count`](Self::plural_count).
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::DivisionByZero`] when an evaluated `/` or `%` has
    /// a zero right operand.
    pub fn evaluate(&self, n: i64) -> Result<i32, EvalError> {
        eval_expr(&self.root, n).map(|index| index as i32)
    }

    /// Compute the plural form index for `n`, requiring it to name a form.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::IndexOutOfRange`] when the index is outside
    /// `0..plural_count`, in addition to the errors of
    /// [`evaluate`](Self::evaluate).
    pub fn evaluate_checked(&self, n: i64) -> Result<usize, EvalError> {
        let index = eval_expr(&self.root, n)?;
        usize::try_from(index)
            .ok()
            .filter(|&form| form < self.plural_count)
            .ok_or(EvalError::IndexOutOfRange {
                index,
                plural_count: self.plural_count,
            })
    }
}

/// gettext's fallback when a catalog has no `Plural-Forms` header:
/// `nplurals=2; plural=n != 1;`.
impl Default for PluralRule {
    fn default() -> Self {
        Self {
            plural_count: 2,
            root: Expr::binary(BinaryOp::Ne, Expr::n(), Expr::number(1)),
        }
    }
}

/// Prints the rule as a `Plural-Forms` header value.
impl fmt::Display for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nplurals={}; plural={};", self.plural_count, self.root)
    }
}
