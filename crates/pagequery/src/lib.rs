//! ## Crate layout
//! - `core`: record metadata, values, filter/sort grammars, predicate
//!   construction, sources, and page assembly.
//! - `derive`: `#[derive(Record)]` and `#[derive(FieldEnum)]`.
//!
//! Everything in `core` is also re-exported at the crate root, which is the
//! path derive output refers to.
//!
//! ```ignore
//! use pagequery::prelude::*;
//!
//! #[derive(Clone, Record)]
//! #[query(rename_all = "camelCase")]
//! pub struct Post {
//!     pub title: String,
//!     pub created_at: DateTime<Utc>,
//! }
//!
//! let params = RequestParameters::new()
//!     .with_filter("title[release],createdAt[2022-09-01,_]")
//!     .with_sort("createdAt desc");
//! let page = PageAssembler::new(&params).to_paged(MemorySource::new(posts))?;
//! ```

pub use pagequery_core as core;
pub use pagequery_core::*;
pub use pagequery_derive::{FieldEnum, Record};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        FieldEnum, Record,
        core::{
            db::{
                Direction,
                paging::PageAssembler,
                request::RequestParameters,
                response::Page,
                source::{
                    AsyncQuerySource as _, CancelSignal, EagerLoad, MemorySource,
                    QuerySource as _, Queryable as _,
                },
            },
            error::{PageError, QueryError},
            traits::{FieldValue as _, Record as _},
            value::Value,
        },
    };
}
