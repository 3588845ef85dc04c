//! Module: query::predicate
//! Responsibility: predicate AST, per-kind literal parsing, and construction
//! from parsed filter items.
//! Does not own: filter string grammar or predicate execution.
//! Boundary: every conversion failure surfaces here, before any source call.

mod ast;
mod builder;
pub mod literal;


pub use ast::Predicate;
pub use builder::PredicateBuilder;
