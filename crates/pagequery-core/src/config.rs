//! Module: config
//! Responsibility: page-size limits applied to incoming request parameters.
//! Does not own: filter/sort semantics or source configuration.

use crate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, error::QueryError};
use serde::Deserialize;
use std::env;

/// Environment variable overriding the default page size.
pub const ENV_DEFAULT_PAGE_SIZE: &str = "PAGEQUERY_DEFAULT_PAGE_SIZE";

/// Environment variable lowering the maximum page size.
pub const ENV_MAX_PAGE_SIZE: &str = "PAGEQUERY_MAX_PAGE_SIZE";

///
/// PageLimits
///
/// Size policy for request parameters. The maximum can be tightened below
/// `MAX_PAGE_SIZE` but never raised above it.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "PageLimitsConfig")]
pub struct PageLimits {
    pub default_size: u32,
    pub max_size: u32,
}

impl PageLimits {
    /// Build limits, checking `1 <= default_size <= max_size <= MAX_PAGE_SIZE`.
    pub fn new(default_size: u32, max_size: u32) -> Result<Self, QueryError> {
        if max_size == 0 || max_size > MAX_PAGE_SIZE {
            return Err(QueryError::validation(
                "max_size",
                format!("between 1 and {MAX_PAGE_SIZE}"),
                i64::from(max_size),
            ));
        }
        if default_size == 0 || default_size > max_size {
            return Err(QueryError::validation(
                "default_size",
                format!("between 1 and {max_size}"),
                i64::from(default_size),
            ));
        }

        Ok(Self {
            default_size,
            max_size,
        })
    }

    /// Defaults overlaid with `PAGEQUERY_*` environment variables.
    pub fn from_env() -> Result<Self, QueryError> {
        let defaults = Self::default();
        let max_size = read_env(ENV_MAX_PAGE_SIZE)?.unwrap_or(defaults.max_size);
        let default_size = read_env(ENV_DEFAULT_PAGE_SIZE)?
            .unwrap_or_else(|| defaults.default_size.min(max_size));

        Self::new(default_size, max_size)
    }

    /// Check a requested size against these limits.
    pub(crate) fn check_size(&self, size: i64) -> Result<u32, QueryError> {
        u32::try_from(size)
            .ok()
            .filter(|size| (1..=self.max_size).contains(size))
            .ok_or_else(|| {
                QueryError::validation("size", format!("between 1 and {}", self.max_size), size)
            })
    }
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: MAX_PAGE_SIZE,
        }
    }
}

///
/// PageLimitsConfig
///
/// Unvalidated deserialization shape. A missing maximum falls back to
/// `MAX_PAGE_SIZE`; a missing default is clamped to the maximum, as in
/// `PageLimits::from_env`.
///

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PageLimitsConfig {
    #[serde(default)]
    default_size: Option<u32>,
    #[serde(default)]
    max_size: Option<u32>,
}

impl TryFrom<PageLimitsConfig> for PageLimits {
    type Error = QueryError;

    fn try_from(config: PageLimitsConfig) -> Result<Self, Self::Error> {
        let max_size = config.max_size.unwrap_or(MAX_PAGE_SIZE);
        let default_size = config
            .default_size
            .unwrap_or_else(|| DEFAULT_PAGE_SIZE.min(max_size));

        Self::new(default_size, max_size)
    }
}

fn read_env(name: &str) -> Result<Option<u32>, QueryError> {
    let Ok(raw) = env::var(name) else {
        return Ok(None);
    };

    raw.trim()
        .parse::<u32>()
        .map(Some)
        .map_err(|err| QueryError::InvalidArgument {
            name: name.to_string(),
            message: err.to_string(),
        })
}
