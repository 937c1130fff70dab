//! Backends over the Ocelot expression AST.
//!
//! One syntax tree drives every pass through a uniform surface:
//!
//! - [`type_resolver::resolved_type`]: static result types, computed
//!   ahead of execution
//! - [`validate::validate`]: post-order validation with accumulated
//!   diagnostics
//! - [`eval::evaluate`]: tree-walking evaluation to dynamic [`Value`]s
//! - [`transpile::transpile`]: source-to-source emission
//! - [`expr::ExprCompiler`]: compilation to stack-machine bytecode
//!
//! The passes are read-only over the tree and may be run in any
//! combination against the same tree; the resolved type a node reports
//! is the representation both execution backends commit to.
//!
//! [`Value`]: ocelot_core::Value

pub mod bytecode;
pub mod emit;
pub mod eval;
pub mod expr;
pub mod transpile;
pub mod type_resolver;
pub mod validate;

pub use eval::{EvalContext, evaluate};
pub use expr::{ExprCompiler, compile};
pub use transpile::transpile;
pub use type_resolver::resolved_type;
pub use validate::{Scope, validate};
