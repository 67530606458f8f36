use std::str::FromStr;

use log::{debug, warn};

use crate::expression::ast::Expression;
use crate::expression::errors::ParseError;
use crate::expression::eval::MAX_EVALUATION_DEPTH;

/// Deepest parenthesis nesting accepted by the parser.
pub const MAX_NESTING_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Literal(i64),
    Plus,
    Star,
    LeftParen,
    RightParen,
    End,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Literal(value) => format!("literal {}", value),
            Token::Plus => String::from("'+'"),
            Token::Star => String::from("'*'"),
            Token::LeftParen => String::from("'('"),
            Token::RightParen => String::from("')'"),
            Token::End => String::from("end of input"),
        }
    }
}

struct Lexer<'a> {
    input: &'a str,
    chars: Vec<(usize, char)>,
    index: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Lexer {
            input,
            chars: input.char_indices().collect(),
            index: 0,
        }
    }

    fn peek(&self) -> Option<(usize, char)> {
        self.chars.get(self.index).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.index + 1).map(|&(_, c)| c)
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some((_, c)) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_literal(&mut self, start: usize) -> Result<Token, ParseError> {
        // A leading '-' has already been checked to precede a digit.
        if let Some((_, '-')) = self.peek() {
            self.advance();
        }
        let mut end = self.input.len();
        while let Some((offset, c)) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                end = offset;
                break;
            }
        }

        let text = &self.input[start..end];
        text.parse::<i64>()
            .map(Token::Literal)
            .map_err(|_| ParseError::LiteralOutOfRange {
                literal: text.to_string(),
            })
    }

    fn next_token(&mut self) -> Result<(usize, Token), ParseError> {
        self.skip_whitespace();

        let Some((position, c)) = self.peek() else {
            return Ok((self.input.len(), Token::End));
        };

        let token = match c {
            '0'..='9' => self.read_literal(position)?,
            '-' if self.peek_next().is_some_and(|n| n.is_ascii_digit()) => {
                self.read_literal(position)?
            }
            '+' => {
                self.advance();
                Token::Plus
            }
            '*' => {
                self.advance();
                Token::Star
            }
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            other => {
                return Err(ParseError::UnexpectedCharacter {
                    character: other,
                    position,
                });
            }
        };

        Ok((position, token))
    }

    fn tokenize(mut self) -> Result<Vec<(usize, Token)>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let (position, token) = self.next_token()?;
            let done = token == Token::End;
            tokens.push((position, token));
            if done {
                return Ok(tokens);
            }
        }
    }
}

/// Recursive descent over the grammar
///
/// ```text
/// sum     := product ('+' product)*
/// product := factor ('*' factor)*
/// factor  := literal | '(' sum ')'
/// ```
struct Parser {
    tokens: Vec<(usize, Token)>,
    index: usize,
    nesting: usize,
}

impl Parser {
    fn peek(&self) -> (usize, &Token) {
        match self.tokens.get(self.index) {
            Some((position, token)) => (*position, token),
            None => (usize::MAX, &Token::End),
        }
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn unexpected(&self) -> ParseError {
        match self.peek() {
            (_, Token::End) => ParseError::UnexpectedEnd,
            (position, token) => ParseError::UnexpectedToken {
                found: token.describe(),
                position,
            },
        }
    }

    fn parse_sum(&mut self) -> Result<(Expression, usize), ParseError> {
        let (mut left, mut depth) = self.parse_product()?;
        while let (_, Token::Plus) = self.peek() {
            self.advance();
            let (right, right_depth) = self.parse_product()?;
            depth = composite_depth(depth, right_depth)?;
            left = Expression::addition(left, right);
        }
        Ok((left, depth))
    }

    fn parse_product(&mut self) -> Result<(Expression, usize), ParseError> {
        let (mut left, mut depth) = self.parse_factor()?;
        while let (_, Token::Star) = self.peek() {
            self.advance();
            let (right, right_depth) = self.parse_factor()?;
            depth = composite_depth(depth, right_depth)?;
            left = Expression::multiplication(left, right);
        }
        Ok((left, depth))
    }

    fn parse_factor(&mut self) -> Result<(Expression, usize), ParseError> {
        match self.peek() {
            (_, Token::Literal(value)) => {
                let value = *value;
                self.advance();
                Ok((Expression::literal(value), 1))
            }
            (_, Token::LeftParen) => {
                if self.nesting >= MAX_NESTING_DEPTH {
                    return Err(ParseError::NestingTooDeep {
                        limit: MAX_NESTING_DEPTH,
                    });
                }
                self.advance();
                self.nesting += 1;
                let inner = self.parse_sum()?;
                self.nesting -= 1;
                match self.peek() {
                    (_, Token::RightParen) => {
                        self.advance();
                        Ok(inner)
                    }
                    _ => Err(self.unexpected()),
                }
            }
            _ => Err(self.unexpected()),
        }
    }
}

/// Depth of a composite node over children of the given depths. Parsed trees
/// never exceed what `try_evaluate` accepts.
fn composite_depth(left: usize, right: usize) -> Result<usize, ParseError> {
    let depth = 1 + left.max(right);
    if depth > MAX_EVALUATION_DEPTH {
        warn!("Expression deeper than {} levels", MAX_EVALUATION_DEPTH);
        return Err(ParseError::ExpressionTooDeep {
            limit: MAX_EVALUATION_DEPTH,
        });
    }
    Ok(depth)
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        debug!("Parsing expression: '{}'", input);

        if input.trim().is_empty() {
            warn!("Expression text is empty");
            return Err(ParseError::Empty);
        }

        let tokens = Lexer::new(input).tokenize()?;
        let mut parser = Parser {
            tokens,
            index: 0,
            nesting: 0,
        };

        let (expression, _) = parser.parse_sum()?;
        if let (_, Token::End) = parser.peek() {
            debug!("Parsed expression: {}", expression);
            Ok(expression)
        } else {
            let err = parser.unexpected();
            warn!("Trailing input after expression: {}", err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests_lexer {
    use super::{Lexer, Token};

    #[test]
    fn test_tokenize_mixed_input() {
        let tokens = Lexer::new("(12 + -3) * 4").tokenize();
        assert!(tokens.is_ok());
        if let Ok(tokens) = tokens {
            let kinds: Vec<Token> = tokens.into_iter().map(|(_, t)| t).collect();
            assert_eq!(
                kinds,
                vec![
                    Token::LeftParen,
                    Token::Literal(12),
                    Token::Plus,
                    Token::Literal(-3),
                    Token::RightParen,
                    Token::Star,
                    Token::Literal(4),
                    Token::End,
                ]
            );
        }
    }

    #[test]
    fn test_tokenize_positions() {
        let tokens = Lexer::new("  7 *  8").tokenize();
        assert!(tokens.is_ok());
        if let Ok(tokens) = tokens {
            let positions: Vec<usize> = tokens.iter().map(|(p, _)| *p).collect();
            assert_eq!(positions, vec![2, 4, 7, 8]);
        }
    }

    #[test]
    fn test_tokenize_minimum_literal() {
        let tokens = Lexer::new("-9223372036854775808").tokenize();
        assert!(tokens.is_ok());
        if let Ok(tokens) = tokens {
            assert_eq!(tokens.first().map(|(_, t)| t.clone()), Some(Token::Literal(i64::MIN)));
        }
    }
}
