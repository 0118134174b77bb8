//! Public expression tree types for plural rule formulas.
//!
//! These types are public so that callers holding an already-parsed rule
//! (or a tree from some other source) can evaluate it directly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A node in a plural rule expression tree.
///
/// Each operator node owns its children, and the child count is fixed by the
/// variant, so a well-formed tree is guaranteed by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Integer literal.
    Number(i64),
    /// The number being pluralized (`n` in gettext formulas).
    N,
    /// A prefix operator applied to one operand.
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// An infix operator applied to two operands.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `condition ? if_true : if_false`
    Ternary {
        condition: Box<Expr>,
        if_true: Box<Expr>,
        if_false: Box<Expr>,
    },
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    /// Logical negation (`!`).
    Not,
}

/// Infix operators, in the order gettext lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
    Ne,
    And,
    Or,
}

impl Expr {
    /// Integer literal node.
    pub fn number(value: i64) -> Self {
        Expr::Number(value)
    }

    /// The current-number node.
    pub fn n() -> Self {
        Expr::N
    }

    /// Logical negation of `operand`.
    pub fn not(operand: Expr) -> Self {
        Expr::Unary {
            op: UnaryOp::Not,
            operand: Box::new(operand),
        }
    }

    /// Binary operator node.
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Conditional node.
    pub fn ternary(condition: Expr, if_true: Expr, if_false: Expr) -> Self {
        Expr::Ternary {
            condition: Box::new(condition),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }

    /// Binding strength of this node when printed; higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Expr::Number(_) | Expr::N => 9,
            Expr::Unary { .. } => 8,
            Expr::Binary { op, .. } => op.precedence(),
            Expr::Ternary { .. } => 1,
        }
    }
}

impl BinaryOp {
    /// The operator token as written in a formula.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    /// Whether the operator always yields `0` or `1`.
    pub fn is_boolean(self) -> bool {
        !matches!(
            self,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem
        )
    }

    fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 2,
            BinaryOp::And => 3,
            BinaryOp::Eq | BinaryOp::Ne => 4,
            BinaryOp::Gt | BinaryOp::Ge | BinaryOp::Lt | BinaryOp::Le => 5,
            BinaryOp::Add | BinaryOp::Sub => 6,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 7,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Not => f.write_str("!"),
        }
    }
}

/// Write `expr`, wrapped in parentheses when `parenthesize` is set.
fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, parenthesize: bool) -> fmt::Result {
    if parenthesize {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

/// Prints the expression in gettext formula syntax.
///
/// Parentheses are emitted only where the tree shape differs from what
/// operator precedence and associativity would produce. For trees whose
/// literals are all non-negative, the output parses back to an identical
/// tree. Negative literals have no formula syntax: they print with a bare
/// minus sign and the result does not parse.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{value}"),
            Expr::N => f.write_str("n"),
            Expr::Unary { op, operand } => {
                write!(f, "{op}")?;
                write_operand(f, operand, operand.precedence() < 8)
            }
            Expr::Binary { op, lhs, rhs } => {
                let precedence = op.precedence();
                write_operand(f, lhs, lhs.precedence() < precedence)?;
                write!(f, " {op} ")?;
                write_operand(f, rhs, rhs.precedence() <= precedence)
            }
            Expr::Ternary {
                condition,
                if_true,
                if_false,
            } => {
                write_operand(f, condition, condition.precedence() <= 1)?;
                write!(f, " ? {if_true} : {if_false}")
            }
        }
    }
}
