//! Recursive-descent AST construction over the parenthesized token stream
//!
//! Layered by precedence: biconditional, implication, disjunction,
//! conjunction, negation, primary. The arrows recurse on their own level
//! (right-associative); the lattice operators loop (left-associative).

use super::token::Token;
use crate::error::ParseError;
use crate::logic::expr::Expr;

pub fn construct_ast(tokens: &[Token]) -> Result<Expr, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    let mut builder = AstBuilder { tokens, pos: 0 };
    let expr = builder.biconditional()?;
    if builder.pos < tokens.len() {
        return Err(ParseError::UnexpectedToken {
            index: builder.pos,
            lexeme: tokens[builder.pos].to_string(),
        });
    }
    Ok(expr)
}

struct AstBuilder<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> AstBuilder<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn biconditional(&mut self) -> Result<Expr, ParseError> {
        let left = self.implication()?;
        if self.eat(&Token::Iff) {
            let right = self.biconditional()?;
            return Ok(Expr::iff(left, right));
        }
        Ok(left)
    }

    fn implication(&mut self) -> Result<Expr, ParseError> {
        let left = self.disjunction()?;
        if self.eat(&Token::Imp) {
            let right = self.implication()?;
            return Ok(Expr::imp(left, right));
        }
        Ok(left)
    }

    fn disjunction(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.conjunction()?;
        while self.eat(&Token::Or) {
            expr = Expr::or(expr, self.conjunction()?);
        }
        Ok(expr)
    }

    fn conjunction(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.negation()?;
        while self.eat(&Token::And) {
            expr = Expr::and(expr, self.negation()?);
        }
        Ok(expr)
    }

    fn negation(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&Token::Not) {
            return Ok(Expr::not(self.negation()?));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            Some(Token::LParen) => {
                self.pos += 1;
                let expr = self.biconditional()?;
                if !self.eat(&Token::RParen) {
                    return Err(ParseError::MissingClosingParen);
                }
                Ok(expr)
            }
            Some(Token::True) => {
                self.pos += 1;
                Ok(Expr::True)
            }
            Some(Token::False) => {
                self.pos += 1;
                Ok(Expr::False)
            }
            Some(Token::Ident(name)) => {
                self.pos += 1;
                Ok(Expr::Variable(name.clone()))
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                index: self.pos,
                lexeme: token.to_string(),
            }),
            None => Err(ParseError::MissingOperand(
                self.tokens
                    .last()
                    .map(|t| t.to_string())
                    .unwrap_or_default(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms_and_groups() {
        assert_eq!(construct_ast(&[Token::True]).unwrap(), Expr::True);
        assert_eq!(
            construct_ast(&[Token::Ident("p".to_string())]).unwrap(),
            Expr::var("p")
        );
        assert_eq!(
            construct_ast(&[Token::LParen, Token::Ident("p".to_string()), Token::RParen]).unwrap(),
            Expr::var("p")
        );
    }

    #[test]
    fn precedence_layers_inside_a_group() {
        // The parenthesizer leaves a single balanced group untouched, so
        // the descent resolves the precedence itself.
        let tokens = [
            Token::LParen,
            Token::Ident("a".to_string()),
            Token::And,
            Token::Ident("b".to_string()),
            Token::Or,
            Token::Ident("c".to_string()),
            Token::RParen,
        ];
        assert_eq!(
            construct_ast(&tokens).unwrap(),
            Expr::or(Expr::and(Expr::var("a"), Expr::var("b")), Expr::var("c"))
        );
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let tokens = [
            Token::Ident("a".to_string()),
            Token::Ident("b".to_string()),
        ];
        assert_eq!(
            construct_ast(&tokens),
            Err(ParseError::UnexpectedToken { index: 1, lexeme: "b".to_string() })
        );
    }

    #[test]
    fn unclosed_group_is_rejected() {
        let tokens = [Token::LParen, Token::Ident("a".to_string())];
        assert_eq!(construct_ast(&tokens), Err(ParseError::MissingClosingParen));
    }
}
