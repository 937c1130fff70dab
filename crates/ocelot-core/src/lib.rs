//! Core types shared across the Ocelot expression engine.
//!
//! This crate holds the vocabulary every other crate speaks: source
//! [`Span`]s, the semantic [`Type`] set, runtime [`Value`]s, and the
//! error hierarchy ([`CompilationError`] for accumulated diagnostics,
//! [`RuntimeError`] for fatal evaluation/VM faults).

pub mod error;
pub mod span;
pub mod types;
pub mod value;

pub use error::{CompilationError, RuntimeError};
pub use span::Span;
pub use types::Type;
pub use value::Value;
