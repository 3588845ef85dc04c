use crate::{
    UNBOUNDED_PLACEHOLDER,
    db::{
        query::{
            path::{FieldPath, PathTarget, resolve_path},
            predicate::{Predicate, literal::parse_literal},
        },
        request::FilterItem,
    },
    error::QueryError,
    model::{FieldKind, RecordModel},
    traits::Record,
    value::Value,
};

///
/// PredicateBuilder
///
/// Turns parsed filter items into one predicate over a record type.
/// Items are AND-ed left to right; values inside an item are OR-ed.
///

#[derive(Clone, Copy, Debug)]
pub struct PredicateBuilder {
    model: &'static RecordModel,
}

impl PredicateBuilder {
    #[must_use]
    pub const fn new(model: &'static RecordModel) -> Self {
        Self { model }
    }

    #[must_use]
    pub fn for_record<R: Record>() -> Self {
        Self::new(R::model())
    }

    /// Build the combined predicate. `None` when there are no items.
    pub fn build(&self, items: &[FilterItem]) -> Result<Option<Predicate>, QueryError> {
        let preds = items
            .iter()
            .map(|item| self.build_item(item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Predicate::and_all(preds))
    }

    pub fn build_item(&self, item: &FilterItem) -> Result<Predicate, QueryError> {
        let resolved = resolve_path(self.model, item.property())?;

        match resolved.target {
            PathTarget::Field(field) => leaf(resolved.path, field.kind, item),
            PathTarget::Collection {
                element: Some(element),
                ..
            } => {
                let inner = leaf(FieldPath::single(element.name), element.kind, item)?;

                Ok(Predicate::any(resolved.path, inner))
            }
            PathTarget::Collection {
                field,
                element: None,
            } => {
                let inner = leaf(FieldPath::element(), field.kind, item)?;

                Ok(Predicate::any(resolved.path, inner))
            }
        }
    }
}

// leaf
fn leaf(path: FieldPath, kind: FieldKind, item: &FilterItem) -> Result<Predicate, QueryError> {
    if kind.is_temporal() {
        return range(path, kind, item);
    }

    let values = item
        .values()
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>();

    let preds = match kind {
        FieldKind::Text => values
            .iter()
            .map(|value| Predicate::contains(path.clone(), *value))
            .collect::<Vec<_>>(),
        FieldKind::Record(_) => {
            return Err(QueryError::conversion(
                item.property(),
                &item.values().join(","),
                kind.to_string(),
            ));
        }
        _ => values
            .iter()
            .map(|value| {
                parse_literal(kind, value)
                    .map(|parsed| Predicate::eq(path.clone(), parsed))
                    .ok_or_else(|| QueryError::conversion(item.property(), value, kind.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    Predicate::or_any(preds).ok_or_else(|| QueryError::EmptyFilterValues {
        property: item.property().to_string(),
    })
}

// range
fn range(path: FieldPath, kind: FieldKind, item: &FilterItem) -> Result<Predicate, QueryError> {
    let [lower, upper] = item.values() else {
        return Err(QueryError::filter_format(
            &item.to_string(),
            format!(
                "{kind} filters take exactly two values (lower,upper), got {}",
                item.values().len()
            ),
        ));
    };

    let lower = bound(kind, item, lower)?;
    let upper = bound(kind, item, upper)?;
    if lower.is_none() && upper.is_none() {
        return Err(QueryError::ValueRequired {
            property: item.property().to_string(),
        });
    }

    Ok(Predicate::range(path, lower, upper))
}

fn bound(kind: FieldKind, item: &FilterItem, raw: &str) -> Result<Option<Value>, QueryError> {
    let raw = raw.trim();
    if raw.is_empty() || raw == UNBOUNDED_PLACEHOLDER {
        return Ok(None);
    }

    parse_literal(kind, raw)
        .map(Some)
        .ok_or_else(|| QueryError::conversion(item.property(), raw, kind.to_string()))
}
