//! Output formatting for CLI commands.

mod diagnostic;
mod table;

pub use diagnostic::FormulaDiagnostic;
pub use table::format_index_table;

use plural_rule::PluralRule;
use serde::Serialize;

/// The result of evaluating a rule for one number.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Index { n: i64, index: i64 },
    Error { n: i64, error: String },
}

impl Outcome {
    /// Evaluate `rule` for `n`, optionally rejecting out-of-range indices.
    pub fn evaluate(rule: &PluralRule, n: i64, checked: bool) -> Self {
        let result = if checked {
            rule.evaluate_checked(n).map(|index| index as i64)
        } else {
            rule.evaluate(n).map(i64::from)
        };
        tracing::trace!(n, ?result, "evaluated plural rule");

        match result {
            Ok(index) => Outcome::Index { n, index },
            Err(e) => Outcome::Error {
                n,
                error: e.to_string(),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }
}
