use std::fmt;

use thiserror::Error;

/// Binary operation that failed during checked evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Multiplication,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operation::Addition => write!(f, "addition"),
            Operation::Multiplication => write!(f, "multiplication"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Integer overflow in {operation} of {left} and {right}")]
    Overflow {
        operation: Operation,
        left: i64,
        right: i64,
    },
    #[error("Expression is nested deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors produced while reading an expression from text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Expression text is empty")]
    Empty,
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("Unexpected {found} at position {position}")]
    UnexpectedToken { found: String, position: usize },
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Integer literal out of range: {literal}")]
    LiteralOutOfRange { literal: String },
    #[error("Parentheses nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("Expression nested deeper than {limit} levels")]
    ExpressionTooDeep { limit: usize },
}
