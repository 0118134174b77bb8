//! Tests for the plural formula parser.

use plural_rule::{
    BinaryOp, Expr, ParseError, ParseOptions, eval_expr, parse_formula, parse_formula_with,
};

fn bin(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(op, lhs, rhs)
}

fn num(value: i64) -> Expr {
    Expr::number(value)
}

fn syntax_error(input: &str) -> (usize, usize, String) {
    match parse_formula(input) {
        Err(ParseError::Syntax {
            line,
            column,
            message,
        }) => (line, column, message),
        other => panic!("expected syntax error for {input:?}, got {other:?}"),
    }
}

// === Atoms ===

#[test]
fn parse_current_number() {
    assert_eq!(parse_formula("n").unwrap(), Expr::N);
}

#[test]
fn parse_number_literal() {
    assert_eq!(parse_formula("42").unwrap(), num(42));
    assert_eq!(parse_formula("9223372036854775807").unwrap(), num(i64::MAX));
}

#[test]
fn parse_surrounding_whitespace() {
    assert_eq!(parse_formula("  n \t\n").unwrap(), Expr::N);
}

#[test]
fn parse_parenthesized() {
    assert_eq!(parse_formula("((n))").unwrap(), Expr::N);
}

// === Precedence and associativity ===

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse_formula("1 + 2 * 3").unwrap(),
        bin(BinaryOp::Add, num(1), bin(BinaryOp::Mul, num(2), num(3)))
    );
    assert_eq!(
        parse_formula("(1 + 2) * 3").unwrap(),
        bin(BinaryOp::Mul, bin(BinaryOp::Add, num(1), num(2)), num(3))
    );
}

#[test]
fn subtraction_is_left_associative() {
    let expr = parse_formula("10 - 3 - 2").unwrap();
    assert_eq!(
        expr,
        bin(BinaryOp::Sub, bin(BinaryOp::Sub, num(10), num(3)), num(2))
    );
    assert_eq!(eval_expr(&expr, 0).unwrap(), 5);
}

#[test]
fn and_binds_tighter_than_or() {
    assert_eq!(
        parse_formula("n == 0 || n == 1 && n == 2").unwrap(),
        bin(
            BinaryOp::Or,
            bin(BinaryOp::Eq, Expr::N, num(0)),
            bin(
                BinaryOp::And,
                bin(BinaryOp::Eq, Expr::N, num(1)),
                bin(BinaryOp::Eq, Expr::N, num(2)),
            ),
        )
    );
}

#[test]
fn relational_binds_tighter_than_equality() {
    assert_eq!(
        parse_formula("n < 5 == 1").unwrap(),
        bin(BinaryOp::Eq, bin(BinaryOp::Lt, Expr::N, num(5)), num(1))
    );
}

#[test]
fn modulo_binds_tighter_than_comparison() {
    assert_eq!(
        parse_formula("n%10==1").unwrap(),
        bin(BinaryOp::Eq, bin(BinaryOp::Rem, Expr::N, num(10)), num(1))
    );
}

#[test]
fn two_character_operators() {
    let cases = [
        ("n<=4", BinaryOp::Le),
        ("n<4", BinaryOp::Lt),
        ("n>=4", BinaryOp::Ge),
        ("n>4", BinaryOp::Gt),
        ("n==4", BinaryOp::Eq),
        ("n!=4", BinaryOp::Ne),
    ];
    for (input, op) in cases {
        assert_eq!(parse_formula(input).unwrap(), bin(op, Expr::N, num(4)), "{input}");
    }
}

#[test]
fn not_binds_tightest() {
    assert_eq!(
        parse_formula("!n == 0").unwrap(),
        bin(BinaryOp::Eq, Expr::not(Expr::N), num(0))
    );
    assert_eq!(parse_formula("!!n").unwrap(), Expr::not(Expr::not(Expr::N)));
}

#[test]
fn ternary_is_right_associative() {
    assert_eq!(
        parse_formula("n == 1 ? 0 : n == 2 ? 1 : 2").unwrap(),
        Expr::ternary(
            bin(BinaryOp::Eq, Expr::N, num(1)),
            num(0),
            Expr::ternary(bin(BinaryOp::Eq, Expr::N, num(2)), num(1), num(2)),
        )
    );
}

#[test]
fn ternary_allows_conditional_in_true_branch() {
    assert_eq!(
        parse_formula("n ? 1 ? 2 : 3 : 4").unwrap(),
        Expr::ternary(Expr::N, Expr::ternary(num(1), num(2), num(3)), num(4))
    );
}

#[test]
fn ternary_condition_takes_whole_logical_expression() {
    assert_eq!(
        parse_formula("n > 1 || n == 0 ? 1 : 0").unwrap(),
        Expr::ternary(
            bin(
                BinaryOp::Or,
                bin(BinaryOp::Gt, Expr::N, num(1)),
                bin(BinaryOp::Eq, Expr::N, num(0)),
            ),
            num(1),
            num(0),
        )
    );
}

// === Syntax errors ===

#[test]
fn empty_input_is_error() {
    let (line, column, message) = syntax_error("");
    assert_eq!((line, column), (1, 1));
    assert_eq!(message, "unexpected end of input");
}

#[test]
fn missing_operand_is_error() {
    let (line, column, message) = syntax_error("n +");
    assert_eq!((line, column), (1, 4));
    assert_eq!(message, "unexpected end of input");
}

#[test]
fn trailing_input_is_error() {
    let (line, column, message) = syntax_error("n != 1 )");
    assert_eq!((line, column), (1, 8));
    assert_eq!(message, "unexpected character: ')'");
}

#[test]
fn unknown_character_is_error() {
    let (_, column, message) = syntax_error("n $ 1");
    assert_eq!(column, 3);
    assert_eq!(message, "unexpected character: '$'");
}

#[test]
fn single_equals_is_error() {
    let (_, column, _) = syntax_error("n = 1");
    assert_eq!(column, 3);
}

#[test]
fn unclosed_parenthesis_is_error() {
    let (_, _, message) = syntax_error("(n + 1");
    assert_eq!(message, "unexpected end of input");
}

#[test]
fn incomplete_ternary_is_error() {
    let (_, column, message) = syntax_error("n ? 1");
    assert_eq!(column, 6);
    assert_eq!(message, "unexpected end of input");
}

#[test]
fn overflowing_literal_is_error() {
    let (_, column, message) = syntax_error("n + 99999999999999999999");
    assert_eq!(column, 5);
    assert!(message.contains("64 bits"));
}

#[test]
fn small_literal_after_missing_token_is_not_overflow() {
    let (_, column, message) = syntax_error("n ? 1 2");
    assert_eq!(column, 7);
    assert_eq!(message, "unexpected character: '2'");

    let (_, column, message) = syntax_error("(n 5");
    assert_eq!(column, 4);
    assert_eq!(message, "unexpected character: '5'");
}

#[test]
fn error_position_tracks_lines() {
    let (line, column, _) = syntax_error("n !=\n  $");
    assert_eq!((line, column), (2, 3));
}

#[test]
fn parse_error_display_includes_location() {
    let err = parse_formula("n $").unwrap_err();
    assert_eq!(err.to_string(), "syntax error at 1:3: unexpected character: '$'");
}

// === Nesting limits ===

#[test]
fn nesting_at_limit_is_accepted() {
    let input = format!("{}n{}", "(".repeat(64), ")".repeat(64));
    assert_eq!(parse_formula(&input).unwrap(), Expr::N);
}

#[test]
fn nesting_past_limit_is_rejected() {
    let input = format!("{}n{}", "(".repeat(65), ")".repeat(65));
    assert_eq!(
        parse_formula(&input),
        Err(ParseError::NestingTooDeep { max_depth: 64 })
    );
}

#[test]
fn long_operator_chain_counts_toward_limit() {
    let input = format!("n{}", " + 1".repeat(100));
    assert_eq!(
        parse_formula(&input),
        Err(ParseError::NestingTooDeep { max_depth: 64 })
    );
}

#[test]
fn operator_chain_limit_counts_operators() {
    let at_limit = format!("n{}", " + 1".repeat(64));
    assert!(parse_formula(&at_limit).is_ok());

    let past_limit = format!("n{}", " + 1".repeat(65));
    assert_eq!(
        parse_formula(&past_limit),
        Err(ParseError::NestingTooDeep { max_depth: 64 })
    );
}

#[test]
fn negation_chain_counts_toward_limit() {
    let options = ParseOptions::builder().max_depth(3).build();
    assert!(parse_formula_with("!!!n", &options).is_ok());
    assert_eq!(
        parse_formula_with("!!!!n", &options),
        Err(ParseError::NestingTooDeep { max_depth: 3 })
    );
}

#[test]
fn custom_depth_limit() {
    let options = ParseOptions::builder().max_depth(2).build();
    assert_eq!(options.max_depth(), 2);
    assert!(parse_formula_with("((n))", &options).is_ok());
    assert!(parse_formula_with("(((n)))", &options).is_err());
}

#[test]
fn default_options_match_builder_defaults() {
    assert_eq!(ParseOptions::default(), ParseOptions::builder().build());
    assert_eq!(ParseOptions::default().max_depth(), 64);
}

#[test]
fn common_gettext_formulas_parse() {
    let formulas = [
        "0",
        "n != 1",
        "n > 1",
        "n == 1 ? 0 : n == 2 ? 1 : 2",
        "n%10==1 && n%100!=11 ? 0 : n != 0 ? 1 : 2",
        "n==1 ? 0 : (n==0 || (n%100 > 0 && n%100 < 20)) ? 1 : 2",
        "(n==1) ? 0 : (n>=2 && n<=4) ? 1 : 2",
        "n==0 ? 0 : n==1 ? 1 : n==2 ? 2 : n%100>=3 && n%100<=10 ? 3 : n%100>=11 ? 4 : 5",
    ];
    for formula in formulas {
        assert!(parse_formula(formula).is_ok(), "{formula}");
    }
}
