//! Tests for building plural rules.

use plural_rule::{BinaryOp, Expr, PluralRule, RuleError};

#[test]
fn new_accepts_positive_counts() {
    for count in [1, 2, 3, 6, 1_000] {
        let rule = PluralRule::new(count, Expr::n()).unwrap();
        assert_eq!(rule.plural_count() as i64, count);
        assert_eq!(rule.root(), &Expr::n());
    }
}

#[test]
fn new_rejects_non_positive_counts() {
    for count in [0, -1, -2, i64::MIN] {
        assert_eq!(
            PluralRule::new(count, Expr::n()),
            Err(RuleError::InvalidPluralCount { count })
        );
    }
}

#[test]
fn try_new_rejects_missing_root() {
    assert_eq!(PluralRule::try_new(2, None), Err(RuleError::MissingRoot));
}

#[test]
fn try_new_checks_count_before_root() {
    assert_eq!(
        PluralRule::try_new(0, None),
        Err(RuleError::InvalidPluralCount { count: 0 })
    );
}

#[test]
fn try_new_with_root_matches_new() {
    let root = Expr::binary(BinaryOp::Ne, Expr::n(), Expr::number(1));
    assert_eq!(
        PluralRule::try_new(2, Some(root.clone())),
        PluralRule::new(2, root)
    );
}

#[test]
fn default_rule_is_gettext_fallback() {
    let rule = PluralRule::default();
    assert_eq!(rule.plural_count(), 2);
    assert_eq!(rule.evaluate(0).unwrap(), 1);
    assert_eq!(rule.evaluate(1).unwrap(), 0);
    assert_eq!(rule.evaluate(2).unwrap(), 1);
    assert_eq!(rule.to_string(), "nplurals=2; plural=n != 1;");
}

#[test]
fn rule_error_messages() {
    let err = RuleError::InvalidPluralCount { count: -3 };
    assert!(err.to_string().contains("-3"));

    let err = RuleError::MissingRoot;
    assert!(err.to_string().contains("expression tree"));
}
