//! Module: query::order
//! Responsibility: sort grammar and the resulting multi-key ordering.
//! Does not own: executing the ordering against a source.
//! Boundary: sort paths that cannot be ordered are rejected here.

use crate::{
    db::{
        Direction,
        query::path::{FieldPath, PathTarget, resolve_path},
    },
    error::QueryError,
    model::{FieldKind, RecordModel},
    traits::Record,
};
use std::fmt;

///
/// SortKey
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortKey {
    pub field: FieldPath,
    pub direction: Direction,
}

impl SortKey {
    #[must_use]
    pub fn new(field: impl Into<FieldPath>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.direction.is_descending() {
            "DESC"
        } else {
            "ASC"
        };

        write!(f, "{} {direction}", self.field)
    }
}

///
/// OrderSpec
///
/// Ordered sort keys; the first key is primary and each later key breaks
/// ties left by the keys before it.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OrderSpec {
    keys: Vec<SortKey>,
}

impl OrderSpec {
    #[must_use]
    pub const fn new(keys: Vec<SortKey>) -> Self {
        Self { keys }
    }

    #[must_use]
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Display for OrderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, key) in self.keys.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}")?;
        }

        Ok(())
    }
}

///
/// SortBuilder
///

#[derive(Clone, Copy, Debug)]
pub struct SortBuilder {
    model: &'static RecordModel,
}

impl SortBuilder {
    #[must_use]
    pub const fn new(model: &'static RecordModel) -> Self {
        Self { model }
    }

    #[must_use]
    pub fn for_record<R: Record>() -> Self {
        Self::new(R::model())
    }

    /// Parse `path [asc|desc], ...` into an ordering.
    ///
    /// Blank tokens are skipped; words after the direction are ignored.
    pub fn build(&self, sort: &str) -> Result<OrderSpec, QueryError> {
        let mut keys = Vec::new();

        for token in sort.split(',') {
            let mut words = token.split_whitespace();
            let Some(path) = words.next() else {
                continue;
            };
            let direction = words.next().map(Direction::from_token).unwrap_or_default();

            keys.push(SortKey {
                field: self.resolve(path)?,
                direction,
            });
        }

        Ok(OrderSpec::new(keys))
    }

    fn resolve(&self, path: &str) -> Result<FieldPath, QueryError> {
        let resolved = resolve_path(self.model, path)?;

        match resolved.target {
            PathTarget::Field(field) if matches!(field.kind, FieldKind::Record(_)) => {
                Err(QueryError::UnsupportedSortPath {
                    path: path.to_string(),
                    reason: format!("'{}' is a nested record", field.name),
                })
            }
            PathTarget::Field(_) => Ok(resolved.path),
            PathTarget::Collection { field, .. } => Err(QueryError::UnsupportedSortPath {
                path: path.to_string(),
                reason: format!("'{}' is a collection", field.name),
            }),
        }
    }
}

///
/// TESTS
///
