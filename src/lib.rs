//! Enumerated - closed variant types in practice
//!
//! The core is a recursive arithmetic [`Expression`] tree evaluated by
//! exhaustive case dispatch. The [`cases`] module covers the rest of the
//! feature area: plain cases, iterable cases, raw values with failable
//! lookup, and cases that carry associated values.

pub mod cases;
pub mod expression;

use log::debug;
use rayon::prelude::*;

// Re-export the main public API
pub use cases::{
    Barcode, Beverage, CaseError, CaseIterable, ControlCharacter, Direction, Planet,
    RawRepresentable,
};
pub use expression::{Expression, ExpressionError, Operation, ParseError};

/// Evaluate independent expression trees in parallel
///
/// Each tree is evaluated with [`Expression::evaluate`], so overflow wraps.
/// Results are returned in the same order as the input.
///
/// # Examples
///
/// ```
/// use enumerated::{Expression, evaluate_all};
///
/// let nine = Expression::addition(Expression::literal(5), Expression::literal(4));
/// let eighteen = Expression::multiplication(nine.clone(), Expression::literal(2));
/// assert_eq!(evaluate_all(&[nine, eighteen]), vec![9, 18]);
/// ```
pub fn evaluate_all(expressions: &[Expression]) -> Vec<i64> {
    debug!("Evaluating {} expressions in parallel", expressions.len());
    expressions.par_iter().map(Expression::evaluate).collect()
}

/// Parse `input` and evaluate it with checked arithmetic
///
/// # Errors
///
/// This function will return an error if:
/// * The text is not a well-formed expression
/// * An intermediate result overflows `i64`
/// * The parsed tree is deeper than the evaluation limit
///
/// # Examples
///
/// ```
/// use enumerated::evaluate_str;
///
/// match evaluate_str("(5 + 4) * 2") {
///     Ok(value) => println!("Value: {}", value),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn evaluate_str(input: &str) -> Result<i64, ExpressionError> {
    let expression: Expression = input.parse()?;
    expression.try_evaluate()
}
