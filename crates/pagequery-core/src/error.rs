use thiserror::Error as ThisError;

///
/// QueryError
///
/// Failures detected while validating request parameters or while turning
/// filter/sort strings into query operations. Every variant is raised before
/// any call reaches the query source.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error("invalid argument '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    #[error("'{name}' must be {expected}, got {value}")]
    Validation {
        name: &'static str,
        expected: String,
        value: i64,
    },

    #[error("malformed filter '{filter}': {message}")]
    FilterFormat { filter: String, message: String },

    #[error("property '{segment}' not found while resolving '{path}' on {record}")]
    PropertyNotFound {
        record: String,
        path: String,
        segment: String,
    },

    #[error("path '{path}' is too deep; {message}")]
    PathTooDeep { path: String, message: String },

    #[error("cannot convert '{value}' to {expected} for property '{property}'")]
    ValueConversion {
        property: String,
        value: String,
        expected: String,
    },

    #[error("filter on '{property}' has no usable values")]
    EmptyFilterValues { property: String },

    #[error("date filter on '{property}' needs a lower or an upper bound")]
    ValueRequired { property: String },

    #[error("cannot sort by '{path}': {reason}")]
    UnsupportedSortPath { path: String, reason: String },
}

impl QueryError {
    pub(crate) fn validation(name: &'static str, expected: impl Into<String>, value: i64) -> Self {
        Self::Validation {
            name,
            expected: expected.into(),
            value,
        }
    }

    pub(crate) fn filter_format(filter: &str, message: impl Into<String>) -> Self {
        Self::FilterFormat {
            filter: filter.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn path_too_deep(path: &str, message: impl Into<String>) -> Self {
        Self::PathTooDeep {
            path: path.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn conversion(property: &str, value: &str, expected: impl Into<String>) -> Self {
        Self::ValueConversion {
            property: property.to_string(),
            value: value.to_string(),
            expected: expected.into(),
        }
    }
}

///
/// PageError
///
/// Outcome of a failed page assembly. Query construction failures and
/// cancellation are ours; source failures are handed back untouched.
///

#[derive(Debug, ThisError)]
pub enum PageError<E> {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Source(E),

    #[error("page assembly cancelled")]
    Cancelled,
}

impl<E> PageError<E> {
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Borrow the query construction error, if that is what failed.
    #[must_use]
    pub const fn as_query(&self) -> Option<&QueryError> {
        match self {
            Self::Query(err) => Some(err),
            _ => None,
        }
    }
}
