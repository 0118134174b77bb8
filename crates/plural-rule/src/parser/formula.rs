//! Formula parser using winnow.
//!
//! Parses the C-like expression language of gettext `plural=` formulas:
//! - the variable `n` and non-negative decimal literals
//! - `!`, `* / %`, `+ -`, `< <= > >=`, `== !=`, `&&`, `||` (left-associative)
//! - `?:` (right-associative, lowest precedence)
//! - parentheses and arbitrary ASCII whitespace between tokens

use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, preceded, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::stream::Stateful;
use winnow::token::take_while;

use super::ast::{BinaryOp, Expr};
use super::error::ParseError;
use super::options::ParseOptions;

/// Nesting bookkeeping carried through the parse.
#[derive(Debug, Clone, Copy)]
pub(super) struct Nesting {
    depth: usize,
    max_depth: usize,
    exceeded: bool,
}

/// Parser input: the remaining text plus nesting state.
pub(super) type Input<'i> = Stateful<&'i str, Nesting>;

/// A precedence level producing an expression.
type Level = for<'i> fn(&mut Input<'i>) -> ModalResult<Expr>;

/// An operator token parser for one precedence level.
type Operator = for<'i> fn(&mut Input<'i>) -> ModalResult<BinaryOp>;

/// Parse a plural formula with default options.
///
/// # Example
///
/// ```
/// use plural_rule::{BinaryOp, Expr, parse_formula};
///
/// let expr = parse_formula("n != 1").unwrap();
/// assert_eq!(expr, Expr::binary(BinaryOp::Ne, Expr::n(), Expr::number(1)));
/// ```
pub fn parse_formula(input: &str) -> Result<Expr, ParseError> {
    parse_formula_with(input, &ParseOptions::default())
}

/// Parse a plural formula with explicit parser limits.
pub fn parse_formula_with(input: &str, options: &ParseOptions) -> Result<Expr, ParseError> {
    let mut stream = new_stream(input, options);
    let result = terminated(conditional, ws).parse_next(&mut stream);
    finish(input, stream, result)
}

/// Wrap `input` for parsing under `options`.
pub(super) fn new_stream<'i>(input: &'i str, options: &ParseOptions) -> Input<'i> {
    Stateful {
        input,
        state: Nesting {
            depth: 0,
            max_depth: options.max_depth(),
            exceeded: false,
        },
    }
}

/// Convert a finished parse into a result, requiring all input be consumed.
pub(super) fn finish<T>(
    original: &str,
    stream: Input<'_>,
    result: ModalResult<T>,
) -> Result<T, ParseError> {
    if stream.state.exceeded {
        return Err(ParseError::NestingTooDeep {
            max_depth: stream.state.max_depth,
        });
    }

    let remaining = stream.input;
    match result {
        Ok(value) if remaining.is_empty() => Ok(value),
        Ok(_) => Err(syntax_error(
            original,
            remaining,
            format!(
                "unexpected character: '{}'",
                remaining.chars().next().unwrap_or('?')
            ),
        )),
        Err(_) => {
            let message = match remaining.chars().next() {
                None => "unexpected end of input".to_string(),
                Some(_) if leading_literal_overflows(remaining) => {
                    "integer literal does not fit in 64 bits".to_string()
                }
                Some(c) => format!("unexpected character: '{c}'"),
            };
            Err(syntax_error(original, remaining, message))
        }
    }
}

/// Whether `remaining` starts with a digit run too large for `i64`.
fn leading_literal_overflows(remaining: &str) -> bool {
    let end = remaining
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(remaining.len());
    let digits = &remaining[..end];
    !digits.is_empty() && digits.parse::<i64>().is_err()
}

fn syntax_error(original: &str, remaining: &str, message: String) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    ParseError::Syntax {
        line,
        column,
        message,
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Enter one nesting level, failing once the limit is reached.
fn descend(input: &mut Input<'_>) -> ModalResult<()> {
    let nesting = &mut input.state;
    if nesting.depth >= nesting.max_depth {
        nesting.exceeded = true;
        return Err(ErrMode::Cut(ContextError::new()));
    }
    nesting.depth += 1;
    Ok(())
}

/// Run `level` one nesting level deeper.
fn nested(input: &mut Input<'_>, level: Level) -> ModalResult<Expr> {
    let entry_depth = input.state.depth;
    let result = descend(input).and_then(|()| level(input));
    input.state.depth = entry_depth;
    result
}

/// Parse optional whitespace.
pub(super) fn ws(input: &mut Input<'_>) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse a full expression: `condition ? if_true : if_false` or any tighter form.
pub(super) fn conditional(input: &mut Input<'_>) -> ModalResult<Expr> {
    let condition = logical_or(input)?;
    if opt(preceded(ws, '?')).parse_next(input)?.is_none() {
        return Ok(condition);
    }
    let if_true = nested(input, conditional)?;
    preceded(ws, ':').void().parse_next(input)?;
    let if_false = nested(input, conditional)?;
    Ok(Expr::ternary(condition, if_true, if_false))
}

/// Parse a left-associative chain of `operand (operator operand)*`.
///
/// Each link deepens the left spine of the tree, so links count against the
/// nesting limit.
fn binary_chain(input: &mut Input<'_>, operand: Level, operator: Operator) -> ModalResult<Expr> {
    let entry_depth = input.state.depth;
    let result = chain_links(input, operand, operator);
    input.state.depth = entry_depth;
    result
}

fn chain_links(input: &mut Input<'_>, operand: Level, operator: Operator) -> ModalResult<Expr> {
    let mut lhs = operand(input)?;
    while let Some(op) = opt(preceded(ws, operator)).parse_next(input)? {
        descend(input)?;
        let rhs = operand(input)?;
        lhs = Expr::binary(op, lhs, rhs);
    }
    Ok(lhs)
}

fn logical_or(input: &mut Input<'_>) -> ModalResult<Expr> {
    binary_chain(input, logical_and, or_operator)
}

fn logical_and(input: &mut Input<'_>) -> ModalResult<Expr> {
    binary_chain(input, equality, and_operator)
}

fn equality(input: &mut Input<'_>) -> ModalResult<Expr> {
    binary_chain(input, relational, equality_operator)
}

fn relational(input: &mut Input<'_>) -> ModalResult<Expr> {
    binary_chain(input, additive, relational_operator)
}

fn additive(input: &mut Input<'_>) -> ModalResult<Expr> {
    binary_chain(input, multiplicative, additive_operator)
}

fn multiplicative(input: &mut Input<'_>) -> ModalResult<Expr> {
    binary_chain(input, unary, multiplicative_operator)
}

fn or_operator(input: &mut Input<'_>) -> ModalResult<BinaryOp> {
    "||".value(BinaryOp::Or).parse_next(input)
}

fn and_operator(input: &mut Input<'_>) -> ModalResult<BinaryOp> {
    "&&".value(BinaryOp::And).parse_next(input)
}

fn equality_operator(input: &mut Input<'_>) -> ModalResult<BinaryOp> {
    alt(("==".value(BinaryOp::Eq), "!=".value(BinaryOp::Ne))).parse_next(input)
}

/// Two-character operators are tried first so `<=` is not read as `<`.
fn relational_operator(input: &mut Input<'_>) -> ModalResult<BinaryOp> {
    alt((
        "<=".value(BinaryOp::Le),
        ">=".value(BinaryOp::Ge),
        '<'.value(BinaryOp::Lt),
        '>'.value(BinaryOp::Gt),
    ))
    .parse_next(input)
}

fn additive_operator(input: &mut Input<'_>) -> ModalResult<BinaryOp> {
    alt(('+'.value(BinaryOp::Add), '-'.value(BinaryOp::Sub))).parse_next(input)
}

fn multiplicative_operator(input: &mut Input<'_>) -> ModalResult<BinaryOp> {
    alt((
        '*'.value(BinaryOp::Mul),
        '/'.value(BinaryOp::Div),
        '%'.value(BinaryOp::Rem),
    ))
    .parse_next(input)
}

/// Parse `!operand` or a primary expression.
fn unary(input: &mut Input<'_>) -> ModalResult<Expr> {
    ws(input)?;
    if opt('!').parse_next(input)?.is_some() {
        return nested(input, unary).map(Expr::not);
    }
    primary(input)
}

/// Parse `n`, an integer literal, or a parenthesized expression.
fn primary(input: &mut Input<'_>) -> ModalResult<Expr> {
    alt(('n'.value(Expr::N), number, parenthesized)).parse_next(input)
}

fn number(input: &mut Input<'_>) -> ModalResult<Expr> {
    digit1
        .try_map(str::parse::<i64>)
        .map(Expr::Number)
        .parse_next(input)
}

fn parenthesized(input: &mut Input<'_>) -> ModalResult<Expr> {
    '('.void().parse_next(input)?;
    let expr = nested(input, conditional)?;
    preceded(ws, ')').void().parse_next(input)?;
    Ok(expr)
}
