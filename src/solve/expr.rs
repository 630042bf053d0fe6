//! Expression tree for parsed algebra text.

/// Binary operators appearing in expression nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// A parsed algebraic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Non-negative integer literal (signs parse as negation nodes).
    Number(i64),
    /// Single-letter variable.
    Variable(char),
    /// Binary operation.
    BinOp {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Negation.
    Neg(Box<Expr>),
}

impl Expr {
    pub fn number(n: i64) -> Self {
        Expr::Number(n)
    }

    pub fn variable(name: char) -> Self {
        Expr::Variable(name)
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Self::binop(BinaryOp::Add, left, right)
    }

    pub fn sub(left: Expr, right: Expr) -> Self {
        Self::binop(BinaryOp::Sub, left, right)
    }

    pub fn mul(left: Expr, right: Expr) -> Self {
        Self::binop(BinaryOp::Mul, left, right)
    }

    pub fn div(left: Expr, right: Expr) -> Self {
        Self::binop(BinaryOp::Div, left, right)
    }

    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Self::binop(BinaryOp::Pow, base, exponent)
    }

    pub fn neg(operand: Expr) -> Self {
        Expr::Neg(Box::new(operand))
    }

    fn binop(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::BinOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
