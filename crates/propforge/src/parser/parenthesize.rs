//! Re-parenthesization of the token stream
//!
//! Rewrites the stream so precedence is encoded by explicit parentheses:
//! negations bind tightest, then `&`, `|`, `=>`, `<=>`. The lattice
//! operators associate left and bracket their top-level occurrences
//! leftmost-first; the arrows associate right and bracket rightmost-first.
//! A stream that is already one balanced `( … )` group is left untouched.

use super::token::Token;
use crate::error::ParseError;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Assoc {
    Left,
    Right,
}

pub fn parenthesize(tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    check_balanced(&tokens)?;
    if is_single_group(&tokens) {
        return Ok(tokens);
    }
    let tokens = wrap_negations(tokens)?;
    let tokens = bracket_operator(tokens, &Token::And, Assoc::Left)?;
    let tokens = bracket_operator(tokens, &Token::Or, Assoc::Left)?;
    let tokens = bracket_operator(tokens, &Token::Imp, Assoc::Right)?;
    bracket_operator(tokens, &Token::Iff, Assoc::Right)
}

fn check_balanced(tokens: &[Token]) -> Result<(), ParseError> {
    let mut depth = 0i32;
    for token in tokens {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth < 0 {
                    return Err(ParseError::UnbalancedParens);
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(ParseError::UnbalancedParens);
    }
    Ok(())
}

/// True when the whole stream is one balanced `( … )` group
fn is_single_group(tokens: &[Token]) -> bool {
    if tokens.len() < 2 || tokens[0] != Token::LParen {
        return false;
    }
    let mut depth = 0i32;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth -= 1,
            _ => {}
        }
        if depth == 0 {
            return i == tokens.len() - 1;
        }
    }
    false
}

/// Wrap every `!X` as `(!X)`, rightmost first so chains nest:
/// `!!a` becomes `(!(!a))`
fn wrap_negations(mut tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    let mut i = tokens.len();
    while i > 0 {
        i -= 1;
        if tokens[i] == Token::Not {
            let end = operand_end(&tokens, i + 1, &Token::Not)?;
            tokens.insert(end, Token::RParen);
            tokens.insert(i, Token::LParen);
        }
    }
    Ok(tokens)
}

/// Bracket every top-level occurrence of `op` with its two operand groups
fn bracket_operator(
    mut tokens: Vec<Token>,
    op: &Token,
    assoc: Assoc,
) -> Result<Vec<Token>, ParseError> {
    loop {
        let Some(i) = find_top_level(&tokens, op, assoc == Assoc::Right) else {
            return Ok(tokens);
        };
        let left = operand_start(&tokens, i, op)?;
        let right = operand_end(&tokens, i + 1, op)?;
        tokens.insert(right, Token::RParen);
        tokens.insert(left, Token::LParen);
    }
}

fn find_top_level(tokens: &[Token], op: &Token, rightmost: bool) -> Option<usize> {
    let mut depth = 0i32;
    let mut found = None;
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth -= 1,
            _ => {
                if depth == 0 && token == op {
                    found = Some(i);
                    if !rightmost {
                        return found;
                    }
                }
            }
        }
    }
    found
}

/// Exclusive end of the operand group starting at `start`
fn operand_end(tokens: &[Token], start: usize, operator: &Token) -> Result<usize, ParseError> {
    match tokens.get(start) {
        Some(Token::Ident(_)) | Some(Token::True) | Some(Token::False) => Ok(start + 1),
        Some(Token::LParen) => {
            let mut depth = 0i32;
            for (i, token) in tokens.iter().enumerate().skip(start) {
                match token {
                    Token::LParen => depth += 1,
                    Token::RParen => {
                        depth -= 1;
                        if depth == 0 {
                            return Ok(i + 1);
                        }
                    }
                    _ => {}
                }
            }
            Err(ParseError::MissingClosingParen)
        }
        _ => Err(ParseError::MissingOperand(operator.to_string())),
    }
}

/// Inclusive start of the operand group ending just before `end`
fn operand_start(tokens: &[Token], end: usize, operator: &Token) -> Result<usize, ParseError> {
    if end == 0 {
        return Err(ParseError::MissingOperand(operator.to_string()));
    }
    match &tokens[end - 1] {
        Token::Ident(_) | Token::True | Token::False => Ok(end - 1),
        Token::RParen => {
            let mut depth = 0i32;
            let mut i = end;
            while i > 0 {
                i -= 1;
                match &tokens[i] {
                    Token::RParen => depth += 1,
                    Token::LParen => {
                        depth -= 1;
                        if depth == 0 {
                            return Ok(i);
                        }
                    }
                    _ => {}
                }
            }
            Err(ParseError::UnbalancedParens)
        }
        _ => Err(ParseError::MissingOperand(operator.to_string())),
    }
}
