//! Module: paging
//! Responsibility: drive a queryable source from request parameters to a page.
//! Does not own: predicate semantics or how the source executes them.
//! Boundary: the filter and ordering are fully built before the source is
//! touched; count and materialize are the only source calls.


use crate::{
    db::{
        query::{OrderSpec, Predicate, PredicateBuilder, SortBuilder},
        request::RequestParameters,
        response::Page,
        source::{AsyncQuerySource, CancelSignal, EagerLoad, QuerySource, Queryable},
    },
    error::{PageError, QueryError},
    model::RecordModel,
    traits::Record,
};
use std::future::Future;
use tracing::{debug, trace, warn};

///
/// PageAssembler
///
/// Applies one request to a source: include directives, filter, ordering,
/// count, then a bounded materialize. Sync and async paths share the same
/// preparation and produce identical pages.
///

#[derive(Clone, Debug)]
pub struct PageAssembler<'a> {
    request: &'a RequestParameters,
    eager: EagerLoad,
}

impl<'a> PageAssembler<'a> {
    #[must_use]
    pub fn new(request: &'a RequestParameters) -> Self {
        Self {
            request,
            eager: EagerLoad::new(),
        }
    }

    /// Include directives forwarded to the source.
    #[must_use]
    pub fn include(mut self, eager: EagerLoad) -> Self {
        self.eager = eager;
        self
    }

    pub fn to_paged<S>(&self, source: S) -> Result<Page<S::Row>, PageError<S::Error>>
    where
        S: QuerySource,
        S::Row: Record,
    {
        let source = self.prepare(source, true)?;

        let elements = source.count().map_err(PageError::Source)?;
        let data = source
            .materialize(self.request.offset(), self.request.size())
            .map_err(PageError::Source)?;

        Ok(self.finish(data, elements))
    }

    /// Async `to_paged`. `cancel` is observed while counting and while
    /// materializing; a cancelled run returns `PageError::Cancelled`.
    pub async fn to_paged_async<S>(
        &self,
        source: S,
        cancel: &CancelSignal,
    ) -> Result<Page<S::Row>, PageError<S::Error>>
    where
        S: AsyncQuerySource,
        S::Row: Record,
    {
        let source = self.prepare(source, true)?;

        let elements = guarded(cancel, "count", source.count_async()).await?;
        let data = guarded(
            cancel,
            "materialize",
            source.materialize_async(self.request.offset(), self.request.size()),
        )
        .await?;

        Ok(self.finish(data, elements))
    }

    /// Count rows matching the filter. The sort string is never applied.
    pub fn count_by_filter<S>(&self, source: S) -> Result<u64, PageError<S::Error>>
    where
        S: QuerySource,
        S::Row: Record,
    {
        let source = self.prepare(source, false)?;

        source.count().map_err(PageError::Source)
    }

    pub async fn count_by_filter_async<S>(
        &self,
        source: S,
        cancel: &CancelSignal,
    ) -> Result<u64, PageError<S::Error>>
    where
        S: AsyncQuerySource,
        S::Row: Record,
    {
        let source = self.prepare(source, false)?;

        guarded(cancel, "count", source.count_async()).await
    }

    // prepare
    fn prepare<S>(&self, source: S, ordered: bool) -> Result<S, QueryError>
    where
        S: Queryable,
        S::Row: Record,
    {
        let model = <S::Row as Record>::model();
        debug!(
            record = model.name,
            page = self.request.page(),
            size = self.request.size(),
            "preparing page query"
        );

        let predicate = self.predicate(model)?;
        let order = if ordered { self.order(model)? } else { None };

        let mut source = source.include(&self.eager);
        if let Some(predicate) = predicate {
            trace!(%predicate, "applying filter");
            source = source.filter(predicate);
        }
        if let Some(order) = order {
            trace!(%order, "applying order");
            source = source.order_by(order);
        }

        Ok(source)
    }

    fn predicate(&self, model: &'static RecordModel) -> Result<Option<Predicate>, QueryError> {
        if !self.request.has_filter() {
            return Ok(None);
        }

        PredicateBuilder::new(model).build(&self.request.filter_items()?)
    }

    fn order(&self, model: &'static RecordModel) -> Result<Option<OrderSpec>, QueryError> {
        let Some(sort) = self.request.sort().filter(|_| self.request.has_sort()) else {
            return Ok(None);
        };
        let order = SortBuilder::new(model).build(sort)?;

        Ok((!order.is_empty()).then_some(order))
    }

    fn finish<T>(&self, data: Vec<T>, elements: u64) -> Page<T> {
        let size = self.request.size();
        if data.len() > usize::try_from(size).unwrap_or(usize::MAX) {
            warn!(
                returned = data.len(),
                size, "source returned more rows than requested; truncating"
            );
        }

        let page = Page::new(data, self.request.page(), size, elements);
        debug!(
            current = page.current(),
            elements = page.elements(),
            pages = page.pages(),
            rows = page.data().len(),
            "page assembled"
        );

        page
    }
}

// Await `op` unless cancellation is requested first.
async fn guarded<T, E>(
    cancel: &CancelSignal,
    stage: &'static str,
    op: impl Future<Output = Result<T, E>>,
) -> Result<T, PageError<E>> {
    tokio::select! {
        biased;

        () = cancel.cancelled() => {
            warn!(stage, "page assembly cancelled");
            Err(PageError::Cancelled)
        }
        result = op => result.map_err(PageError::Source),
    }
}
