//! Module: source
//! Responsibility: the contract a queryable data source must expose, plus an
//! in-memory implementation and the cancellation signal used by async paging.
//! Does not own: how a backend executes predicates or orderings.
//! Boundary: rows handed back by a source are never mutated or tracked.

mod cancel;
mod memory;

pub use cancel::{CancelHandle, CancelSignal};
pub use memory::MemorySource;

use crate::db::query::{OrderSpec, Predicate};
use async_trait::async_trait;

///
/// EagerLoad
///
/// Related-data include directives. Passed to the source untouched.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EagerLoad {
    paths: Vec<String>,
}

impl EagerLoad {
    #[must_use]
    pub const fn new() -> Self {
        Self { paths: Vec::new() }
    }

    #[must_use]
    pub fn with(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

///
/// Queryable
///
/// Composable query over some backend. Each step consumes the query and
/// returns the narrowed one.
///

pub trait Queryable: Sized {
    type Row;
    type Error: std::error::Error;

    /// Apply include directives. Backends without related data ignore them.
    #[must_use]
    fn include(self, _eager: &EagerLoad) -> Self {
        self
    }

    /// Narrow to rows matching `predicate`, in addition to earlier filters.
    #[must_use]
    fn filter(self, predicate: Predicate) -> Self;

    /// Replace the row ordering.
    #[must_use]
    fn order_by(self, order: OrderSpec) -> Self;
}

///
/// QuerySource
///

pub trait QuerySource: Queryable {
    /// Number of rows the query matches, ignoring any slice.
    fn count(&self) -> Result<u64, Self::Error>;

    /// Up to `limit` rows starting at `offset`, in query order.
    fn materialize(&self, offset: u64, limit: u32) -> Result<Vec<Self::Row>, Self::Error>;
}

///
/// AsyncQuerySource
///

#[async_trait]
pub trait AsyncQuerySource: Queryable + Send + Sync {
    async fn count_async(&self) -> Result<u64, Self::Error>;

    async fn materialize_async(
        &self,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Self::Row>, Self::Error>;
}
