//! CLI command implementations.

mod eval;
mod rule_source;
mod table;

pub use eval::{run_eval, EvalArgs};
pub use rule_source::RuleArgs;
pub use table::{run_table, TableArgs};
