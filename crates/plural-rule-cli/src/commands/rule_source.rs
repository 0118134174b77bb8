//! Loading the plural rule a command operates on.

use std::fs::read_to_string;
use std::path::PathBuf;

use miette::{miette, IntoDiagnostic, Result, WrapErr};
use plural_rule::{
    parse_formula_with, parse_plural_forms_with, Expr, HeaderError, ParseOptions, PluralRule,
};

use crate::output::FormulaDiagnostic;

/// Arguments selecting and configuring the rule to evaluate.
#[derive(Debug, clap::Args)]
pub struct RuleArgs {
    #[command(flatten)]
    pub source: RuleSource,

    /// Number of plural forms for --formula and --tree
    #[arg(long, default_value_t = 2)]
    pub nplurals: i64,

    /// Maximum nesting depth accepted by the formula parser
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// Where the rule comes from. Exactly one must be given.
#[derive(Debug, clap::Args)]
#[group(required = true, multiple = false)]
pub struct RuleSource {
    /// Plural-Forms header value (e.g. "nplurals=2; plural=n != 1;")
    #[arg(long)]
    pub header: Option<String>,

    /// Bare plural formula (e.g. "n != 1")
    #[arg(long)]
    pub formula: Option<String>,

    /// JSON file containing a serialized expression tree
    #[arg(long)]
    pub tree: Option<PathBuf>,
}

impl RuleArgs {
    /// Build the rule described by these arguments.
    pub fn load(&self) -> Result<PluralRule> {
        let options = ParseOptions::builder()
            .maybe_max_depth(self.max_depth)
            .build();

        let rule = if let Some(header) = &self.source.header {
            parse_plural_forms_with(header, &options).map_err(|e| match e {
                HeaderError::Parse(err) => {
                    FormulaDiagnostic::from_parse_error("header", header, &err).into()
                }
                HeaderError::Rule(err) => miette!("Invalid Plural-Forms header: {}", err),
            })?
        } else if let Some(formula) = &self.source.formula {
            let root = parse_formula_with(formula, &options)
                .map_err(|e| FormulaDiagnostic::from_parse_error("formula", formula, &e))?;
            PluralRule::new(self.nplurals, root).into_diagnostic()?
        } else if let Some(path) = &self.source.tree {
            let content = read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Cannot read tree file {}", path.display()))?;
            let root: Expr = serde_json::from_str(&content)
                .into_diagnostic()
                .wrap_err_with(|| format!("Invalid expression tree in {}", path.display()))?;
            PluralRule::new(self.nplurals, root).into_diagnostic()?
        } else {
            return Err(miette!("one of --header, --formula or --tree is required"));
        };

        tracing::debug!(
            plural_count = rule.plural_count(),
            formula = %rule.root(),
            "loaded plural rule"
        );
        Ok(rule)
    }
}
