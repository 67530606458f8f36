/// Arithmetic expression over a closed set of variants.
///
/// Each composite node owns its two children through a `Box`, so a tree is
/// finite, acyclic and fully built by the time it exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(i64),
    Addition(Box<Expression>, Box<Expression>),
    Multiplication(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn literal(value: i64) -> Self {
        Expression::Literal(value)
    }

    pub fn addition(left: Expression, right: Expression) -> Self {
        Expression::Addition(Box::new(left), Box::new(right))
    }

    pub fn multiplication(left: Expression, right: Expression) -> Self {
        Expression::Multiplication(Box::new(left), Box::new(right))
    }

    /// Number of nodes on the longest root-to-leaf path. A literal has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Literal(_) => 1,
            Expression::Addition(l, r) | Expression::Multiplication(l, r) => {
                1 + l.depth().max(r.depth())
            }
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Expression::Literal(_) => 1,
            Expression::Addition(l, r) | Expression::Multiplication(l, r) => {
                1 + l.node_count() + r.node_count()
            }
        }
    }
}
