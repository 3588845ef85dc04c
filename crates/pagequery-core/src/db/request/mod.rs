//! Module: request
//! Responsibility: validated page/size plus raw filter and sort strings.
//! Does not own: predicate or ordering construction.
//! Boundary: page and size are checked on every assignment, never later.

mod filter;

#[cfg(test)]
mod tests;

pub use filter::{FilterItem, parse_filter};

use crate::{DEFAULT_PAGE, config::PageLimits, error::QueryError};
use serde::{Deserialize, Serialize};

///
/// RequestParameters
///
/// Page request. Construction and every setter keep `page >= 1` and
/// `1 <= size <= limits.max_size`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "RequestInput")]
pub struct RequestParameters {
    page: u32,
    size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<String>,
    #[serde(skip)]
    limits: PageLimits,
}

impl RequestParameters {
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(PageLimits::default())
    }

    /// Defaults taken from `limits`, which also bound later size changes.
    #[must_use]
    pub const fn with_limits(limits: PageLimits) -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: limits.default_size,
            sort: None,
            filter: None,
            limits,
        }
    }

    /// Build from untyped key/value pairs such as a decoded query string.
    ///
    /// Keys are matched case-insensitively; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::new();

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());

            if key.eq_ignore_ascii_case("page") {
                params.set_page(parse_int("page", value)?)?;
            } else if key.eq_ignore_ascii_case("size") {
                params.set_size(parse_int("size", value)?)?;
            } else if key.eq_ignore_ascii_case("sort") {
                params.set_sort(Some(value.to_string()));
            } else if key.eq_ignore_ascii_case("filter") {
                params.set_filter(Some(value.to_string()));
            }
        }

        Ok(params)
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    #[must_use]
    pub const fn limits(&self) -> &PageLimits {
        &self.limits
    }

    pub fn set_page(&mut self, page: i64) -> Result<(), QueryError> {
        self.page = u32::try_from(page)
            .ok()
            .filter(|page| *page >= 1)
            .ok_or_else(|| QueryError::validation("page", "at least 1", page))?;

        Ok(())
    }

    pub fn set_size(&mut self, size: i64) -> Result<(), QueryError> {
        self.size = self.limits.check_size(size)?;

        Ok(())
    }

    pub fn set_sort(&mut self, sort: Option<String>) {
        self.sort = sort;
    }

    pub fn set_filter(&mut self, filter: Option<String>) {
        self.filter = filter;
    }

    pub fn with_page(mut self, page: i64) -> Result<Self, QueryError> {
        self.set_page(page)?;

        Ok(self)
    }

    pub fn with_size(mut self, size: i64) -> Result<Self, QueryError> {
        self.set_size(size)?;

        Ok(self)
    }

    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn has_filter(&self) -> bool {
        is_present(self.filter.as_deref())
    }

    #[must_use]
    pub fn has_sort(&self) -> bool {
        is_present(self.sort.as_deref())
    }

    /// Rows to skip before this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.size)
    }

    /// Parse the filter string. Absent or blank filters yield no items.
    pub fn filter_items(&self) -> Result<Vec<FilterItem>, QueryError> {
        parse_filter(self.filter.as_deref().unwrap_or_default())
    }
}

impl Default for RequestParameters {
    fn default() -> Self {
        Self::new()
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.trim().is_empty())
}

fn parse_int(name: &str, raw: &str) -> Result<i64, QueryError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|err| QueryError::InvalidArgument {
            name: name.to_string(),
            message: format!("'{raw}' is not an integer: {err}"),
        })
}

///
/// RequestInput
///
/// Unvalidated wire shape; missing keys take the defaults.
///

#[derive(Deserialize)]
#[serde(default)]
struct RequestInput {
    page: i64,
    size: i64,
    sort: Option<String>,
    filter: Option<String>,
}

impl Default for RequestInput {
    fn default() -> Self {
        let defaults = RequestParameters::new();

        Self {
            page: i64::from(defaults.page),
            size: i64::from(defaults.size),
            sort: None,
            filter: None,
        }
    }
}

impl TryFrom<RequestInput> for RequestParameters {
    type Error = QueryError;

    fn try_from(input: RequestInput) -> Result<Self, Self::Error> {
        let mut params = Self::new();
        params.set_page(input.page)?;
        params.set_size(input.size)?;
        params.set_sort(input.sort);
        params.set_filter(input.filter);

        Ok(params)
    }
}
