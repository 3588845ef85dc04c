//! Core runtime for pagequery: record metadata, values, the filter/sort
//! grammars, predicate construction, and page assembly over a queryable source.
#![warn(unreachable_pub)]

extern crate self as pagequery;

// public exports are one module level down
pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// CONSTANTS
///

/// Page number used when the caller does not supply one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Largest page size a request may ask for.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Filter slot meaning "no bound" for date and timestamp ranges.
pub const UNBOUNDED_PLACEHOLDER: &str = "_";

/// re-exports
///
/// derive output refers to these so downstream crates do not need to name
/// chrono in their own Cargo.toml
pub mod __reexports {
    pub use chrono;
}

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sources, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        db::{
            paging::PageAssembler,
            request::RequestParameters,
            response::Page,
            source::{AsyncQuerySource, QuerySource, Queryable},
        },
        model::{FieldKind, FieldModel, RecordModel},
        traits::{FieldValue, Record},
        value::Value,
    };
}
