//! Arithmetic expression trees split into submodules

mod ast;
mod display;
mod errors;
mod eval;
mod parse;

pub use ast::Expression;
pub use errors::{ExpressionError, Operation, ParseError};
pub use eval::MAX_EVALUATION_DEPTH;
pub use parse::MAX_NESTING_DEPTH;
