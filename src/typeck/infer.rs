//! Expression type inference.

use super::checker::TypeChecker;
use super::diagnostics::{codes, error};
use crate::diagnostics::CompilerError;
use crate::syntax::{Expr, TokenKind, Ty, UnOp};

impl TypeChecker {
    /// Compute the type of an expression. Operand failures propagate
    /// unchanged; the first error aborts the walk.
    pub fn infer_type(&self, expr: &Expr) -> Result<Ty, CompilerError> {
        match expr {
            Expr::Literal(literal) => Ok(match literal.token.kind {
                TokenKind::Number => {
                    // The token class says "numeric"; only the `.` test
                    // distinguishes int from float.
                    if literal.token.lexeme.contains('.') {
                        self.registry.float_ty()
                    } else {
                        self.registry.int_ty()
                    }
                }
                TokenKind::Str => self.registry.string_ty(),
                TokenKind::True | TokenKind::False => self.registry.bool_ty(),
            }),
            Expr::Binary(binary) => {
                let left = self.infer_type(&binary.left)?;
                let right = self.infer_type(&binary.right)?;
                if binary.op.is_arithmetic() {
                    self.unify_types(&left, &right)
                } else {
                    Ok(self.registry.bool_ty())
                }
            }
            Expr::Unary(unary) => {
                let operand = self.infer_type(&unary.operand)?;
                match unary.op {
                    UnOp::Not => Ok(self.registry.bool_ty()),
                    UnOp::Neg => Ok(operand),
                }
            }
            Expr::Variable(variable) => self
                .registry
                .lookup_variable(&variable.name)
                .cloned()
                .ok_or_else(|| {
                    error(
                        codes::UNKNOWN_VARIABLE,
                        format!("Unknown variable: {}", variable.name),
                    )
                }),
            Expr::Call(call) => {
                let callee = self.infer_type(&call.callee)?;
                match callee.as_fn() {
                    Some(fn_ty) => Ok((*fn_ty.ret).clone()),
                    None => Err(error(
                        codes::NOT_CALLABLE,
                        "Cannot call non-function type",
                    )),
                }
            }
            Expr::Lambda(lambda) => {
                let params = lambda.params.iter().map(|param| param.ty.clone()).collect();
                Ok(Ty::function(params, lambda.return_type.clone()))
            }
            Expr::List(list) => {
                let Some(first) = list.elements.first() else {
                    return Err(error(
                        codes::EMPTY_ARRAY_LITERAL,
                        "Cannot infer type of empty array",
                    ));
                };
                let element = self.infer_type(first)?;
                Ok(Ty::dynamic_array(element))
            }
        }
    }
}
