//! Tree-walking evaluation of plural rule expressions.
//!
//! Formulas use integers as booleans: comparisons and logical operators yield
//! `0` or `1`, and any nonzero value counts as true. `&&`, `||` and `?:` only
//! evaluate the operands they need, so a division by zero on a branch that is
//! not taken never surfaces.

use crate::parser::{BinaryOp, Expr, UnaryOp};
use crate::rule::EvalError;

/// Evaluate an expression tree for the number `n`.
///
/// Arithmetic is 64-bit two's complement and wraps on overflow.
///
/// # Errors
///
/// Returns [`EvalError::DivisionByZero`] if a `/` or `%` that is actually
/// evaluated has a zero right operand.
///
/// # Example
///
/// ```
/// use plural_rule::{BinaryOp, Expr, eval_expr};
///
/// let expr = Expr::binary(BinaryOp::Rem, Expr::n(), Expr::number(10));
/// assert_eq!(eval_expr(&expr, 21).unwrap(), 1);
/// ```
pub fn eval_expr(expr: &Expr, n: i64) -> Result<i64, EvalError> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::N => Ok(n),
        Expr::Unary { op, operand } => match op {
            UnaryOp::Not => Ok(flag(eval_expr(operand, n)? == 0)),
        },
        Expr::Binary { op, lhs, rhs } => eval_binary(*op, lhs, rhs, n),
        Expr::Ternary {
            condition,
            if_true,
            if_false,
        } => {
            if eval_expr(condition, n)? != 0 {
                eval_expr(if_true, n)
            } else {
                eval_expr(if_false, n)
            }
        }
    }
}

fn eval_binary(op: BinaryOp, lhs: &Expr, rhs: &Expr, n: i64) -> Result<i64, EvalError> {
    match op {
        BinaryOp::And => Ok(flag(eval_expr(lhs, n)? != 0 && eval_expr(rhs, n)? != 0)),
        BinaryOp::Or => Ok(flag(eval_expr(lhs, n)? != 0 || eval_expr(rhs, n)? != 0)),
        BinaryOp::Add => operands(lhs, rhs, n).map(|(l, r)| l.wrapping_add(r)),
        BinaryOp::Sub => operands(lhs, rhs, n).map(|(l, r)| l.wrapping_sub(r)),
        BinaryOp::Mul => operands(lhs, rhs, n).map(|(l, r)| l.wrapping_mul(r)),
        BinaryOp::Div | BinaryOp::Rem => {
            let (l, r) = operands(lhs, rhs, n)?;
            if r == 0 {
                return Err(EvalError::DivisionByZero { op });
            }
            if op == BinaryOp::Div {
                Ok(l.wrapping_div(r))
            } else {
                Ok(l.wrapping_rem(r))
            }
        }
        BinaryOp::Gt => operands(lhs, rhs, n).map(|(l, r)| flag(l > r)),
        BinaryOp::Ge => operands(lhs, rhs, n).map(|(l, r)| flag(l >= r)),
        BinaryOp::Lt => operands(lhs, rhs, n).map(|(l, r)| flag(l < r)),
        BinaryOp::Le => operands(lhs, rhs, n).map(|(l, r)| flag(l <= r)),
        BinaryOp::Eq => operands(lhs, rhs, n).map(|(l, r)| flag(l == r)),
        BinaryOp::Ne => operands(lhs, rhs, n).map(|(l, r)| flag(l != r)),
    }
}

/// Evaluate both operands, left first.
fn operands(lhs: &Expr, rhs: &Expr, n: i64) -> Result<(i64, i64), EvalError> {
    Ok((eval_expr(lhs, n)?, eval_expr(rhs, n)?))
}

/// Formula truth value: `1` for true, `0` for false.
fn flag(condition: bool) -> i64 {
    i64::from(condition)
}
