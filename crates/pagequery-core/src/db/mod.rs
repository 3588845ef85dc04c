//! Query construction and page assembly.
//!
//! Leaf-first: `query::path` resolves dotted paths against record metadata,
//! `query::predicate` and `query::order` turn filter/sort strings into a
//! predicate AST and an ordering, `request` validates and parses caller input,
//! and `paging` drives a `source` to produce a `response::Page`.

mod direction;

pub mod paging;
pub mod query;
pub mod request;
pub mod response;
pub mod source;

pub use direction::Direction;
