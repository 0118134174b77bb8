//! Implementation of the `plural table` command.

use miette::{miette, IntoDiagnostic, Result};

use super::RuleArgs;
use crate::output::{format_index_table, Outcome};

/// Arguments for the table command.
#[derive(Debug, clap::Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub rule: RuleArgs,

    /// First number of the range
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub from: i64,

    /// Last number of the range (inclusive)
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    pub to: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Largest number of rows a single table may contain.
const MAX_ROWS: u64 = 100_000;

/// Run the table command.
pub fn run_table(args: TableArgs) -> Result<i32> {
    check_range(args.from, args.to)?;

    let rule = args.rule.load()?;
    let outcomes: Vec<Outcome> = (args.from..=args.to)
        .map(|n| Outcome::evaluate(&rule, n, false))
        .collect();

    if args.json {
        let json_output = serde_json::to_string_pretty(&outcomes).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!("{}", format_index_table(rule.plural_count(), &outcomes));
    }

    if outcomes.iter().any(Outcome::is_error) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Reject empty or oversized ranges before any evaluation.
fn check_range(from: i64, to: i64) -> Result<()> {
    if from > to {
        return Err(miette!(
            "--from ({}) must not be greater than --to ({})",
            from,
            to
        ));
    }
    if to.abs_diff(from) >= MAX_ROWS {
        return Err(miette!(
            help = "narrow --from/--to or run several smaller tables",
            "range {}..={} exceeds the {} row limit",
            from,
            to,
            MAX_ROWS
        ));
    }
    Ok(())
}
