use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Literal(value) => write!(f, "{}", value),
            Expression::Addition(l, r) => write!(f, "({} + {})", l, r),
            Expression::Multiplication(l, r) => write!(f, "({} * {})", l, r),
        }
    }
}
