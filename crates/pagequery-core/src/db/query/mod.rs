pub mod eval;
pub mod order;
pub mod path;
pub mod predicate;

pub use order::{OrderSpec, SortBuilder, SortKey};
pub use path::{FieldPath, PathTarget, ResolvedPath, resolve_path};
pub use predicate::{Predicate, PredicateBuilder};
