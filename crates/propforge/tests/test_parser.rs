//! Parser integration tests: synonyms, precedence, round-trips, errors

use propforge::{parse, Expr, ParseError};

#[test]
fn every_synonym_of_a_connective_parses_alike() {
    let groups: [&[&str]; 5] = [
        &["a & b", "a ∧ b", "a ^ b", "a && b", "a * b", "a AND b", "a and b"],
        &["a | b", "a ∨ b", "a || b", "a + b", "a v b", "a OR b", "a or b"],
        &["!a", "¬a", "~a", "NOT a", "not a"],
        &["a => b", "a -> b", "a → b", "a IMP b", "a implies b"],
        &["a <=> b", "a <-> b", "a ↔ b", "a IFF b", "a equiv b"],
    ];
    for group in groups {
        let expected = parse(group[0]).unwrap();
        for input in group {
            assert_eq!(parse(input).unwrap(), expected, "input {:?}", input);
        }
    }
}

#[test]
fn constant_synonyms_parse_at_token_boundaries() {
    let expected = Expr::and(Expr::True, Expr::False);
    for input in ["true & false", "T & F", "t & f", "1 & 0", "TRUE & FALSE", "True & False"] {
        assert_eq!(parse(input).unwrap(), expected, "input {:?}", input);
    }
    // A constant letter glued to more word characters is an identifier.
    assert_eq!(parse("Tx").unwrap(), Expr::var("Tx"));
    assert_eq!(parse("f0").unwrap(), Expr::var("f0"));
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(
        parse("a & b | c").unwrap(),
        Expr::or(Expr::and(Expr::var("a"), Expr::var("b")), Expr::var("c"))
    );
    assert_eq!(
        parse("!a & b").unwrap(),
        Expr::and(Expr::not(Expr::var("a")), Expr::var("b"))
    );
    assert_eq!(
        parse("a => b => c").unwrap(),
        Expr::imp(Expr::var("a"), Expr::imp(Expr::var("b"), Expr::var("c")))
    );
    assert_eq!(
        parse("a <=> b <=> c").unwrap(),
        Expr::iff(Expr::var("a"), Expr::iff(Expr::var("b"), Expr::var("c")))
    );
    assert_eq!(
        parse("a & b & c").unwrap(),
        Expr::and(Expr::and(Expr::var("a"), Expr::var("b")), Expr::var("c"))
    );
    assert_eq!(
        parse("a | b & c => d").unwrap(),
        Expr::imp(
            Expr::or(Expr::var("a"), Expr::and(Expr::var("b"), Expr::var("c"))),
            Expr::var("d")
        )
    );
}

#[test]
fn explicit_parentheses_override_precedence() {
    assert_eq!(
        parse("a & (b | c)").unwrap(),
        Expr::and(Expr::var("a"), Expr::or(Expr::var("b"), Expr::var("c")))
    );
    assert_eq!(
        parse("(a => b) => c").unwrap(),
        Expr::imp(Expr::imp(Expr::var("a"), Expr::var("b")), Expr::var("c"))
    );
}

#[test]
fn parse_to_string_round_trips() {
    let corpus = [
        "a",
        "true",
        "false",
        "!a",
        "!!a",
        "!(a & b)",
        "a & b | c",
        "a | b & c",
        "a => b => c",
        "a <=> (b => c)",
        "(a | b) & !(c | d)",
        "a & true",
        "false | a",
        "!(p => q) <=> p & !q",
        "!a | !b | !c",
    ];
    for input in corpus {
        let expr = parse(input).unwrap();
        let reparsed = parse(&expr.to_string()).unwrap();
        assert_eq!(expr, reparsed, "input {:?} printed {:?}", input, expr.to_string());
    }
}

#[test]
fn malformed_inputs_are_structured_errors() {
    assert_eq!(parse(""), Err(ParseError::EmptyExpression));
    assert_eq!(parse("(a & b"), Err(ParseError::UnbalancedParens));
    assert_eq!(parse("a & b)"), Err(ParseError::UnbalancedParens));
    assert_eq!(parse("a &"), Err(ParseError::MissingOperand("&".to_string())));
    assert_eq!(parse("=> a"), Err(ParseError::MissingOperand("=>".to_string())));
    assert_eq!(parse("!"), Err(ParseError::MissingOperand("!".to_string())));
    assert!(matches!(parse("a $ b"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse("a 10"), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn keywords_are_not_identifiers() {
    for keyword in ["and", "OR", "not", "imp", "iff", "implies", "equiv"] {
        assert!(parse(keyword).is_err(), "keyword {:?}", keyword);
    }
    // Words containing keywords are plain identifiers.
    assert_eq!(parse("android").unwrap(), Expr::var("android"));
    assert_eq!(parse("iffy").unwrap(), Expr::var("iffy"));
}

#[test]
fn identifiers_allow_digits_and_underscores_after_a_letter() {
    assert_eq!(parse("x_1 & y2").unwrap(), Expr::and(Expr::var("x_1"), Expr::var("y2")));
    assert!(parse("_x").is_err());
}
