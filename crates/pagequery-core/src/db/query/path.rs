//! Module: query::path
//! Responsibility: resolve dotted property paths against record metadata.
//! Does not own: value parsing or predicate construction.
//! Boundary: the depth policy for filter and sort paths lives here.

use crate::{
    error::QueryError,
    model::{FieldModel, RecordModel},
};
use std::fmt;

///
/// CONSTANTS
///

/// Longest path accepted without passing through a collection.
pub const MAX_PLAIN_DEPTH: usize = 2;

///
/// FieldPath
///
/// Canonical field-access chain. An empty path addresses the current value
/// itself (a scalar collection element).
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FieldPath(Vec<&'static str>);

impl FieldPath {
    #[must_use]
    pub const fn new(segments: Vec<&'static str>) -> Self {
        Self(segments)
    }

    /// Path addressing a collection element itself.
    #[must_use]
    pub const fn element() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn single(name: &'static str) -> Self {
        Self(vec![name])
    }

    #[must_use]
    pub fn segments(&self) -> &[&'static str] {
        &self.0
    }

    #[must_use]
    pub fn is_element(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[&'static str; N]> for FieldPath {
    fn from(segments: [&'static str; N]) -> Self {
        Self(segments.to_vec())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_element() {
            return f.write_str("it");
        }

        f.write_str(&self.0.join("."))
    }
}

///
/// PathTarget
///

#[derive(Clone, Copy, Debug)]
pub enum PathTarget {
    /// Non-collection leaf.
    Field(&'static FieldModel),

    /// Traversal stopped at a collection. `element` is the clean-path field
    /// inside each element, or `None` when the element itself is the leaf.
    Collection {
        field: &'static FieldModel,
        element: Option<&'static FieldModel>,
    },
}

///
/// ResolvedPath
///

#[derive(Clone, Debug)]
pub struct ResolvedPath {
    /// Canonical chain up to and including the stopping point.
    pub path: FieldPath,
    pub target: PathTarget,
}

impl ResolvedPath {
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self.target, PathTarget::Collection { .. })
    }
}

/// Resolve `path` against `model`.
///
/// Paths longer than `MAX_PLAIN_DEPTH` segments are accepted only when an
/// intermediate segment is a collection; the walk stops at that collection
/// and the single remaining segment becomes the clean path.
pub fn resolve_path(model: &'static RecordModel, path: &str) -> Result<ResolvedPath, QueryError> {
    let segments = path.split('.').collect::<Vec<_>>();

    if let Some(bad) = segments.iter().find(|segment| !is_segment(segment)) {
        return Err(not_found(model.name, path, bad));
    }
    let Some((leaf, parents)) = segments.split_last() else {
        return Err(not_found(model.name, path, path));
    };

    let mut current = model;
    let mut chain = Vec::with_capacity(segments.len());

    for (index, segment) in parents.iter().enumerate() {
        let field = lookup(current, path, segment)?;
        chain.push(field.name);

        if field.is_collection() {
            return collection_target(path, chain, field, &segments[index + 1..]);
        }

        current = match field.kind.record() {
            Some(record) => record,
            None if segments.len() > MAX_PLAIN_DEPTH => return Err(too_deep(path)),
            None => return Err(not_found(field.name, path, segments[index + 1])),
        };
    }

    if segments.len() > MAX_PLAIN_DEPTH {
        return Err(too_deep(path));
    }

    let field = lookup(current, path, leaf)?;
    chain.push(field.name);

    let target = if field.is_collection() {
        PathTarget::Collection {
            field,
            element: None,
        }
    } else {
        PathTarget::Field(field)
    };

    Ok(ResolvedPath {
        path: FieldPath::new(chain),
        target,
    })
}

fn collection_target(
    path: &str,
    chain: Vec<&'static str>,
    field: &'static FieldModel,
    remaining: &[&str],
) -> Result<ResolvedPath, QueryError> {
    let element = match remaining {
        [] => None,
        [leaf] => {
            let record = field
                .kind
                .record()
                .ok_or_else(|| not_found(field.name, path, leaf))?;
            let element = lookup(record, path, leaf)?;
            if element.is_collection() {
                return Err(QueryError::path_too_deep(
                    path,
                    "collections inside collection elements are not supported",
                ));
            }

            Some(element)
        }
        _ => {
            return Err(QueryError::path_too_deep(
                path,
                "only one segment may follow a collection",
            ));
        }
    };

    Ok(ResolvedPath {
        path: FieldPath::new(chain),
        target: PathTarget::Collection { field, element },
    })
}

fn lookup(
    record: &'static RecordModel,
    path: &str,
    segment: &str,
) -> Result<&'static FieldModel, QueryError> {
    record
        .field(segment)
        .ok_or_else(|| not_found(record.name, path, segment))
}

fn too_deep(path: &str) -> QueryError {
    QueryError::path_too_deep(
        path,
        "paths longer than two segments must pass through a collection",
    )
}

fn not_found(record: &str, path: &str, segment: &str) -> QueryError {
    QueryError::PropertyNotFound {
        record: record.to_string(),
        path: path.to_string(),
        segment: segment.to_string(),
    }
}

fn is_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_fixtures::{Author, Post},
        traits::Record,
    };

    fn target_name(resolved: &ResolvedPath) -> (&'static str, Option<&'static str>) {
        match resolved.target {
            PathTarget::Field(field) => (field.name, None),
            PathTarget::Collection { field, element } => (field.name, element.map(|e| e.name)),
        }
    }

    #[test]
    fn single_segment_resolves_case_insensitively() {
        let resolved = resolve_path(Post::model(), "TITLE").expect("title resolves");

        assert_eq!(resolved.path, FieldPath::from(["title"]));
        assert_eq!(target_name(&resolved), ("title", None));
    }

    #[test]
    fn renamed_field_resolves_by_exposed_name() {
        let resolved = resolve_path(Post::model(), "createdAt").expect("createdAt resolves");

        assert_eq!(resolved.path, FieldPath::from(["createdAt"]));
    }

    #[test]
    fn nested_record_resolves_in_two_segments() {
        let resolved = resolve_path(Post::model(), "author.name").expect("author.name resolves");

        assert_eq!(resolved.path, FieldPath::from(["author", "name"]));
        assert!(!resolved.is_collection());
    }

    #[test]
    fn collection_stops_walk_with_clean_path() {
        let resolved = resolve_path(Post::model(), "tags.NAME").expect("tags.name resolves");

        assert_eq!(resolved.path, FieldPath::from(["tags"]));
        assert_eq!(target_name(&resolved), ("tags", Some("name")));
    }

    #[test]
    fn scalar_collection_is_its_own_leaf() {
        let resolved = resolve_path(Post::model(), "labels").expect("labels resolves");

        assert_eq!(target_name(&resolved), ("labels", None));
        assert!(resolved.is_collection());
    }

    #[test]
    fn three_segments_through_intermediate_collection_succeed() {
        let resolved = resolve_path(Post::model(), "author.books.title")
            .expect("books is an intermediate collection");

        assert_eq!(resolved.path, FieldPath::from(["author", "books"]));
        assert_eq!(target_name(&resolved), ("books", Some("title")));
    }

    #[test]
    fn collection_inside_element_is_too_deep() {
        let err = resolve_path(Author::model(), "books.tags").expect_err("nested collection");

        assert!(matches!(err, QueryError::PathTooDeep { .. }));
    }

    #[test]
    fn three_segments_without_collection_are_too_deep() {
        let err = resolve_path(Post::model(), "author.address.city").expect_err("too deep");

        assert!(matches!(err, QueryError::PathTooDeep { .. }));
    }

    #[test]
    fn depth_is_checked_before_leaf_lookup() {
        let err = resolve_path(Post::model(), "author.address.nope").expect_err("too deep");

        assert!(matches!(err, QueryError::PathTooDeep { .. }));
    }

    #[test]
    fn deep_path_through_scalar_is_too_deep() {
        let err = resolve_path(Post::model(), "author.name.length").expect_err("too deep");

        assert!(matches!(err, QueryError::PathTooDeep { .. }));
    }

    #[test]
    fn two_segments_after_collection_are_too_deep() {
        let err = resolve_path(Post::model(), "tags.name.length").expect_err("too deep");

        assert!(matches!(err, QueryError::PathTooDeep { .. }));
    }

    #[test]
    fn unknown_segment_is_not_found() {
        let err = resolve_path(Post::model(), "missing").expect_err("unknown");

        assert_eq!(
            err,
            QueryError::PropertyNotFound {
                record: "Post".to_string(),
                path: "missing".to_string(),
                segment: "missing".to_string(),
            }
        );
    }

    #[test]
    fn private_fields_are_not_addressable() {
        let err = resolve_path(Post::model(), "secret").expect_err("private field");

        assert!(matches!(err, QueryError::PropertyNotFound { .. }));
    }

    #[test]
    fn member_access_on_scalar_is_not_found() {
        let err = resolve_path(Post::model(), "title.length").expect_err("scalar member");

        assert!(matches!(
            err,
            QueryError::PropertyNotFound { ref segment, .. } if segment == "length"
        ));
    }

    #[test]
    fn malformed_segment_is_not_found() {
        let err = resolve_path(Post::model(), "author..name").expect_err("empty segment");

        assert!(matches!(err, QueryError::PropertyNotFound { .. }));
    }
}
