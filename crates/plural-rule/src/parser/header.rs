//! `Plural-Forms` header parser.
//!
//! Catalogs declare their plural rule in the header entry, e.g.
//! `Plural-Forms: nplurals=3; plural=(n==1 ? 0 : n>=2 && n<=4 ? 1 : 2);`.
//! The `Plural-Forms:` label is optional so both the raw header line and its
//! value are accepted.

use winnow::ascii::{Caseless, digit1};
use winnow::combinator::opt;
use winnow::prelude::*;

use super::ast::Expr;
use super::error::HeaderError;
use super::formula::{Input, conditional, finish, new_stream, ws};
use super::options::ParseOptions;
use crate::rule::PluralRule;

/// Parse a `Plural-Forms` header into a rule with default options.
///
/// # Example
///
/// ```
/// use plural_rule::parse_plural_forms;
///
/// let rule = parse_plural_forms("nplurals=2; plural=n != 1;").unwrap();
/// assert_eq!(rule.plural_count(), 2);
/// assert_eq!(rule.evaluate(1).unwrap(), 0);
/// assert_eq!(rule.evaluate(7).unwrap(), 1);
/// ```
pub fn parse_plural_forms(header: &str) -> Result<PluralRule, HeaderError> {
    parse_plural_forms_with(header, &ParseOptions::default())
}

/// Parse a `Plural-Forms` header into a rule with explicit parser limits.
///
/// # Errors
///
/// Returns [`HeaderError::Parse`] for malformed input and
/// [`HeaderError::Rule`] when `nplurals` is zero.
pub fn parse_plural_forms_with(
    header: &str,
    options: &ParseOptions,
) -> Result<PluralRule, HeaderError> {
    let mut stream = new_stream(header, options);
    let result = plural_forms.parse_next(&mut stream);
    let (plural_count, root) = finish(header, stream, result)?;
    Ok(PluralRule::new(plural_count, root)?)
}

/// Parse `[Plural-Forms:] nplurals=N; plural=EXPR[;]`.
fn plural_forms(input: &mut Input<'_>) -> ModalResult<(i64, Expr)> {
    (ws, opt((Caseless("plural-forms"), ws, ':'))).void().parse_next(input)?;
    (ws, "nplurals", ws, '=', ws).void().parse_next(input)?;
    let plural_count = digit1.try_map(str::parse::<i64>).parse_next(input)?;
    (ws, ';', ws, "plural", ws, '=').void().parse_next(input)?;
    let root = conditional(input)?;
    (ws, opt(';'), ws).void().parse_next(input)?;
    Ok((plural_count, root))
}
