//! Tokenizer: normalizes the accepted surface syntaxes to canonical tokens
//!
//! Symbolic forms are matched with nom combinators, longest synonym first
//! so `<=>` and `<->` are never half-consumed by the implication arrows.
//! Word forms are lexed as maximal `[A-Za-z0-9_]` runs and classified
//! afterwards, which realizes the token-boundary rule for the
//! one-character constant synonyms: `T & F` lexes as constants while `Tx`
//! stays a single identifier.

use crate::error::ParseError;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    combinator::value,
    IResult,
};
use std::fmt;

/// Canonical token kinds emitted by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Not,
    And,
    Or,
    Imp,
    Iff,
    LParen,
    RParen,
    True,
    False,
    Ident(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Not => write!(f, "!"),
            Token::And => write!(f, "&"),
            Token::Or => write!(f, "|"),
            Token::Imp => write!(f, "=>"),
            Token::Iff => write!(f, "<=>"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::True => write!(f, "true"),
            Token::False => write!(f, "false"),
            Token::Ident(name) => write!(f, "{}", name),
        }
    }
}

/// Symbolic operator and punctuation forms
fn symbol(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::Iff, alt((tag("<=>"), tag("<->"), tag("↔")))),
        value(Token::Imp, alt((tag("=>"), tag("->"), tag("→")))),
        value(Token::And, alt((tag("&&"), tag("∧"), tag("^"), tag("*"), tag("&")))),
        value(Token::Or, alt((tag("||"), tag("∨"), tag("+"), tag("|")))),
        value(Token::Not, alt((tag("¬"), tag("~"), tag("!")))),
        value(Token::LParen, tag("(")),
        value(Token::RParen, tag(")")),
    ))(input)
}

/// Maximal run of word characters, classified by `classify_word`
fn word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

fn classify_word(lexeme: &str, index: usize) -> Result<Token, ParseError> {
    // `v` is an OR synonym as a whole lowercase word only; `V` stays a
    // variable.
    if lexeme == "v" {
        return Ok(Token::Or);
    }
    match lexeme.to_ascii_lowercase().as_str() {
        "and" => return Ok(Token::And),
        "or" => return Ok(Token::Or),
        "not" => return Ok(Token::Not),
        "imp" | "implies" => return Ok(Token::Imp),
        "iff" | "equiv" => return Ok(Token::Iff),
        "true" | "t" | "1" => return Ok(Token::True),
        "false" | "f" | "0" => return Ok(Token::False),
        _ => {}
    }
    if is_identifier(lexeme) {
        return Ok(Token::Ident(lexeme.to_string()));
    }
    Err(ParseError::UnexpectedToken {
        index,
        lexeme: lexeme.to_string(),
    })
}

fn is_identifier(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Turn free-form input into canonical tokens
///
/// Blank input yields an empty stream; rejecting it is the parenthesizer's
/// job.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut rest = input.trim_start();
    while !rest.is_empty() {
        let index = input.len() - rest.len();
        if let Ok((next, lexeme)) = word(rest) {
            tokens.push(classify_word(lexeme, index)?);
            rest = next.trim_start();
        } else if let Ok((next, token)) = symbol(rest) {
            tokens.push(token);
            rest = next.trim_start();
        } else {
            let lexeme: String = rest.chars().take(1).collect();
            return Err(ParseError::UnexpectedToken { index, lexeme });
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).unwrap()
    }

    #[test]
    fn every_and_synonym_normalizes() {
        let expected = tokens("a & b");
        for input in ["a ∧ b", "a ^ b", "a && b", "a * b", "a AND b", "a and b", "a AnD b"] {
            assert_eq!(tokens(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn every_or_synonym_normalizes() {
        let expected = tokens("a | b");
        for input in ["a ∨ b", "a || b", "a + b", "a v b", "a OR b", "a or b"] {
            assert_eq!(tokens(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn every_arrow_synonym_normalizes() {
        let imp = tokens("a => b");
        for input in ["a -> b", "a → b", "a IMP b", "a implies b"] {
            assert_eq!(tokens(input), imp, "input {:?}", input);
        }
        let iff = tokens("a <=> b");
        for input in ["a <-> b", "a ↔ b", "a IFF b", "a equiv b"] {
            assert_eq!(tokens(input), iff, "input {:?}", input);
        }
    }

    #[test]
    fn negation_synonyms_normalize() {
        let expected = tokens("!a");
        for input in ["¬a", "~a", "NOT a", "not a"] {
            assert_eq!(tokens(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn unicode_needs_no_surrounding_whitespace() {
        assert_eq!(tokens("a∧b"), tokens("a & b"));
        assert_eq!(tokens("¬a∨b"), tokens("!a | b"));
    }

    #[test]
    fn constants_normalize_at_token_boundaries() {
        let expected = vec![Token::True, Token::And, Token::False];
        for input in ["true & false", "T & F", "t & f", "1 & 0", "TRUE & FALSE"] {
            assert_eq!(tokens(input), expected, "input {:?}", input);
        }
        assert_eq!(tokens("(T)"), vec![Token::LParen, Token::True, Token::RParen]);
        assert_eq!(tokens("!F"), vec![Token::Not, Token::False]);
    }

    #[test]
    fn constant_letters_inside_identifiers_stay_identifiers() {
        assert_eq!(tokens("Tx"), vec![Token::Ident("Tx".to_string())]);
        assert_eq!(tokens("falsey"), vec![Token::Ident("falsey".to_string())]);
    }

    #[test]
    fn uppercase_v_is_a_variable() {
        assert_eq!(tokens("V"), vec![Token::Ident("V".to_string())]);
        assert_eq!(
            tokens("a v V"),
            vec![Token::Ident("a".to_string()), Token::Or, Token::Ident("V".to_string())]
        );
    }

    #[test]
    fn multi_digit_runs_are_rejected() {
        let err = tokenize("10").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken { index: 0, lexeme: "10".to_string() }
        );
    }

    #[test]
    fn stray_characters_are_rejected_with_position() {
        let err = tokenize("a @ b").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken { index: 2, lexeme: "@".to_string() }
        );
    }

    #[test]
    fn blank_input_is_an_empty_stream() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
