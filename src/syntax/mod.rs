//! The fixed syntax surface consumed by the type checker: the nine-variant
//! type representation, the seven-variant expression set, and the token
//! shapes used to discriminate literals.

pub mod expr;
pub mod token;
pub mod ty;

pub use expr::{
    BinOp, BinaryExpr, CallExpr, Expr, LambdaExpr, LambdaParam, ListExpr, LiteralExpr, UnOp,
    UnaryExpr, VariableExpr,
};
pub use token::{Token, TokenKind};
pub use ty::{ArrayTy, BasicTy, ClassTy, FnTy, GenericTy, PointerTy, RefTy, TraitTy, Ty, TypeVar};
