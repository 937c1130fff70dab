//! Tree validation with diagnostic accumulation.
//!
//! Validation walks post-order: both operand subtrees are validated
//! before the node itself, and every finding is appended to the scope's
//! diagnostic sink anchored to the span of the offending operand. The
//! walk never aborts on a finding.

use ocelot_ast::Expr;
use ocelot_core::{CompilationError, Type};

use crate::type_resolver::resolved_type;

/// The validation scope handed down from the symbol-table layer.
///
/// The expression core only ever appends diagnostics here; identifier
/// resolution belongs to leaf nodes upstream. The sink is append-only,
/// so validating the same tree twice records its findings twice.
#[derive(Debug, Default)]
pub struct Scope {
    errors: Vec<CompilationError>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a diagnostic.
    pub fn add_error(&mut self, error: CompilationError) {
        self.errors.push(error);
    }

    /// The diagnostics recorded so far, in the order they were raised.
    pub fn errors(&self) -> &[CompilationError] {
        &self.errors
    }

    /// Drain the recorded diagnostics.
    pub fn take_errors(&mut self) -> Vec<CompilationError> {
        std::mem::take(&mut self.errors)
    }
}

/// Validate an expression tree, accumulating diagnostics in `scope`.
pub fn validate(expr: &Expr<'_>, scope: &mut Scope) {
    match expr {
        Expr::Literal(_) => {}
        Expr::Additive(add) => {
            validate(add.left, scope);
            validate(add.right, scope);
            if resolved_type(expr) == Type::Int {
                check_int_operand(add.left, scope);
                check_int_operand(add.right, scope);
            }
        }
        Expr::Equality(eq) => {
            // Any two types compare textually; only the operand subtrees
            // themselves need validating.
            validate(eq.left, scope);
            validate(eq.right, scope);
        }
    }
}

fn check_int_operand(operand: &Expr<'_>, scope: &mut Scope) {
    let found = resolved_type(operand);
    if found != Type::Int {
        scope.add_error(CompilationError::IncompatibleTypes {
            expected: Type::Int,
            found,
            span: operand.span(),
        });
    }
}
