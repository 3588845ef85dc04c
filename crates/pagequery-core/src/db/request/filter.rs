use crate::error::QueryError;
use regex::Regex;
use std::{fmt, sync::LazyLock};

// property[values]; no escaping of ',', '[' or ']'
static FILTER_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z0-9_.]*)\[([^\]]*)\]").expect("static filter pattern"));

///
/// FilterItem
///
/// One `property[v1,v2,...]` clause. Values are trimmed and may be blank;
/// the predicate builder decides what a blank slot means.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterItem {
    property: String,
    values: Vec<String>,
}

impl FilterItem {
    #[must_use]
    pub fn new(property: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            property: property.into(),
            values,
        }
    }

    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl fmt::Display for FilterItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.property, self.values.join(","))
    }
}

/// Parse a filter string into its items.
///
/// A blank filter yields no items. Text outside matched clauses is ignored,
/// so `a[1],b[2]` and `a[1] b[2]` read the same.
pub fn parse_filter(filter: &str) -> Result<Vec<FilterItem>, QueryError> {
    if filter.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    for captures in FILTER_ITEM.captures_iter(filter) {
        let property = captures.get(1).map_or("", |m| m.as_str());
        let body = captures.get(2).map_or("", |m| m.as_str());

        if property.is_empty() {
            return Err(QueryError::filter_format(filter, "property name is empty"));
        }
        if property.split('.').any(str::is_empty) {
            return Err(QueryError::filter_format(
                filter,
                format!("property '{property}' has an empty segment"),
            ));
        }

        let values = body
            .split(',')
            .map(|value| value.trim().to_string())
            .collect();
        items.push(FilterItem::new(property, values));
    }

    if items.is_empty() {
        return Err(QueryError::filter_format(
            filter,
            "expected one or more property[values] clauses",
        ));
    }

    Ok(items)
}

///
/// TESTS
///
