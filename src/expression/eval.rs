use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::{ExpressionError, Operation};

/// Deepest root-to-leaf path `try_evaluate` will descend before giving up.
pub const MAX_EVALUATION_DEPTH: usize = 1_024;

impl Expression {
    /// Reduce the tree to a single integer.
    ///
    /// Arithmetic wraps on overflow (two's complement), so this never fails or
    /// panics. Use [`Expression::try_evaluate`] to detect overflow instead.
    pub fn evaluate(&self) -> i64 {
        match self {
            Expression::Literal(value) => *value,
            Expression::Addition(l, r) => l.evaluate().wrapping_add(r.evaluate()),
            Expression::Multiplication(l, r) => l.evaluate().wrapping_mul(r.evaluate()),
        }
    }

    /// # Errors
    ///
    /// Returns an error when:
    /// - An addition or multiplication overflows `i64`
    /// - The tree is deeper than [`MAX_EVALUATION_DEPTH`]
    pub fn try_evaluate(&self) -> Result<i64, ExpressionError> {
        debug!("Evaluating expression");

        let result = checked_evaluate(self, 1);

        match &result {
            Ok(value) => debug!("Expression {} evaluated to: {}", self, value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }
}

fn checked_evaluate(expr: &Expression, depth: usize) -> Result<i64, ExpressionError> {
    if depth > MAX_EVALUATION_DEPTH {
        return Err(ExpressionError::DepthLimitExceeded {
            limit: MAX_EVALUATION_DEPTH,
        });
    }

    match expr {
        Expression::Literal(value) => Ok(*value),
        Expression::Addition(l, r) => {
            let left = checked_evaluate(l, depth + 1)?;
            let right = checked_evaluate(r, depth + 1)?;
            left.checked_add(right).ok_or(ExpressionError::Overflow {
                operation: Operation::Addition,
                left,
                right,
            })
        }
        Expression::Multiplication(l, r) => {
            let left = checked_evaluate(l, depth + 1)?;
            let right = checked_evaluate(r, depth + 1)?;
            left.checked_mul(right).ok_or(ExpressionError::Overflow {
                operation: Operation::Multiplication,
                left,
                right,
            })
        }
    }
}
