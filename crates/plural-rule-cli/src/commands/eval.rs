//! Implementation of the `plural eval` command.

use miette::IntoDiagnostic;

use super::RuleArgs;
use crate::output::Outcome;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    #[command(flatten)]
    pub rule: RuleArgs,

    /// Numbers to classify
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Treat indices outside 0..nplurals as errors
    #[arg(long)]
    pub checked: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let rule = args.rule.load()?;

    let outcomes: Vec<Outcome> = args
        .numbers
        .iter()
        .map(|&n| Outcome::evaluate(&rule, n, args.checked))
        .collect();
    let failed = outcomes.iter().any(Outcome::is_error);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcomes).into_diagnostic()?
        );
    } else {
        for outcome in &outcomes {
            match outcome {
                Outcome::Index { n, index } => println!("{}: {}", n, index),
                Outcome::Error { n, error } => eprintln!("{}: evaluation error: {}", n, error),
            }
        }
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
