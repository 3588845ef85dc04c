//! Module: query::eval
//! Responsibility: in-memory lowering of `Predicate` and `OrderSpec`.
//! Does not own: predicate construction or path validation.
//! Boundary: used by `MemorySource`; other backends lower the AST themselves.

use crate::{
    db::query::{order::OrderSpec, path::FieldPath, predicate::Predicate},
    traits::Record,
    value::{TextMode, Value},
};
use std::cmp::Ordering;

///
/// FieldPresence
///

#[derive(Clone, Debug, PartialEq)]
pub enum FieldPresence {
    Present(Value),
    Missing,
}

///
/// Row
///
/// Anything a predicate can be evaluated against: a record, or a value
/// inside a collection.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;

    /// The row as a single value, used by element paths.
    fn this(&self) -> FieldPresence {
        FieldPresence::Missing
    }
}

impl<T: Record> Row for T {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get_value(name) {
            Some(value) => FieldPresence::Present(value),
            None => FieldPresence::Missing,
        }
    }
}

impl Row for Value {
    fn field(&self, name: &str) -> FieldPresence {
        match Self::field(self, name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }

    fn this(&self) -> FieldPresence {
        FieldPresence::Present(self.clone())
    }
}

/// Follow `path` from `row`.
pub fn read<R: Row + ?Sized>(row: &R, path: &FieldPath) -> FieldPresence {
    let Some((first, rest)) = path.segments().split_first() else {
        return row.this();
    };
    let FieldPresence::Present(mut value) = row.field(first) else {
        return FieldPresence::Missing;
    };

    for segment in rest {
        match value.field(segment) {
            Some(next) => value = next.clone(),
            None => return FieldPresence::Missing,
        }
    }

    FieldPresence::Present(value)
}

/// Evaluate `predicate` against `row`. Missing fields and nulls never match.
#[must_use]
pub fn eval<R: Row + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::And(children) => children.iter().all(|child| eval(row, child)),
        Predicate::Or(children) => children.iter().any(|child| eval(row, child)),
        Predicate::Eq { field, value } => {
            present(row, field).is_some_and(|actual| {
                actual.strict_cmp(value).is_some_and(Ordering::is_eq)
            })
        }
        Predicate::Contains { field, value } => present(row, field).is_some_and(|actual| {
            actual
                .text_contains(&Value::Text(value.clone()), TextMode::Ci)
                .unwrap_or(false)
        }),
        Predicate::Range {
            field,
            lower,
            upper,
        } => present(row, field).is_some_and(|actual| {
            let above = lower.as_ref().is_none_or(|lower| {
                actual.strict_cmp(lower).is_some_and(Ordering::is_ge)
            });
            let below = upper.as_ref().is_none_or(|upper| {
                actual.strict_cmp(upper).is_some_and(Ordering::is_le)
            });

            above && below
        }),
        Predicate::Any {
            collection,
            predicate,
        } => present(row, collection).is_some_and(|actual| {
            actual
                .as_list()
                .is_some_and(|items| items.iter().any(|item| eval(item, predicate)))
        }),
    }
}

fn present<R: Row + ?Sized>(row: &R, path: &FieldPath) -> Option<Value> {
    match read(row, path) {
        FieldPresence::Present(Value::Null) | FieldPresence::Missing => None,
        FieldPresence::Present(value) => Some(value),
    }
}

/// Lexicographic comparison over the sort keys. Missing values sort as null.
#[must_use]
pub fn compare_rows<R: Row + ?Sized>(order: &OrderSpec, left: &R, right: &R) -> Ordering {
    for key in order.keys() {
        let left = sort_value(left, &key.field);
        let right = sort_value(right, &key.field);
        let ordering = left.canonical_cmp(&right);

        let ordering = if key.direction.is_descending() {
            ordering.reverse()
        } else {
            ordering
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

fn sort_value<R: Row + ?Sized>(row: &R, path: &FieldPath) -> Value {
    match read(row, path) {
        FieldPresence::Present(value) => value,
        FieldPresence::Missing => Value::Null,
    }
}

///
/// TESTS
///
