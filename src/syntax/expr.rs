//! Expression surface consumed by type inference.
//!
//! Seven node kinds, mirroring what the parser hands to the checker. The
//! operator enums are closed: only the arithmetic and comparison operators
//! the checker defines semantics for are representable.

use super::token::Token;
use super::ty::Ty;

/// Expression node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Literal(LiteralExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Variable(VariableExpr),
    Call(CallExpr),
    Lambda(LambdaExpr),
    List(ListExpr),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralExpr {
    pub token: Token,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: BinOp,
    pub right: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnaryExpr {
    pub op: UnOp,
    pub operand: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableExpr {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LambdaExpr {
    pub params: Vec<LambdaParam>,
    pub return_type: Ty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LambdaParam {
    pub name: String,
    pub ty: Ty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListExpr {
    pub elements: Vec<Expr>,
}

/// Binary operator identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinOp {
    /// Arithmetic operators unify their operand types; everything else in
    /// the set is a comparison yielding `bool`.
    #[must_use]
    pub fn is_arithmetic(self) -> bool {
        matches!(self, BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div)
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
        }
    }
}

/// Unary operator identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnOp {
    /// Logical not; always yields `bool`.
    Not,
    /// Arithmetic negation; preserves the operand type.
    Neg,
}

impl Expr {
    #[must_use]
    pub fn literal(token: Token) -> Self {
        Expr::Literal(LiteralExpr { token })
    }

    #[must_use]
    pub fn binary(left: Expr, op: BinOp, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    #[must_use]
    pub fn unary(op: UnOp, operand: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            op,
            operand: Box::new(operand),
        })
    }

    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(VariableExpr { name: name.into() })
    }

    #[must_use]
    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call(CallExpr {
            callee: Box::new(callee),
            args,
        })
    }

    #[must_use]
    pub fn lambda(params: Vec<LambdaParam>, return_type: Ty) -> Self {
        Expr::Lambda(LambdaExpr {
            params,
            return_type,
        })
    }

    #[must_use]
    pub fn list(elements: Vec<Expr>) -> Self {
        Expr::List(ListExpr { elements })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_classification_splits_arithmetic_from_comparison() {
        let arithmetic = [BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Div];
        let comparison = [
            BinOp::Eq,
            BinOp::Ne,
            BinOp::Lt,
            BinOp::Le,
            BinOp::Gt,
            BinOp::Ge,
        ];
        for op in arithmetic {
            assert!(op.is_arithmetic(), "{}", op.symbol());
        }
        for op in comparison {
            assert!(!op.is_arithmetic(), "{}", op.symbol());
        }
    }
}
