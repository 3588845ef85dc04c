use crate::db::{
    query::{
        OrderSpec, Predicate,
        eval::{Row, compare_rows, eval},
    },
    source::{AsyncQuerySource, EagerLoad, QuerySource, Queryable},
};
use async_trait::async_trait;
use std::convert::Infallible;

///
/// MemorySource
///
/// Queryable over an owned row set. Filters are AND-ed; ordering is stable,
/// so rows tied on every key keep their insertion order.
///

#[derive(Clone, Debug)]
pub struct MemorySource<T> {
    rows: Vec<T>,
    predicate: Option<Predicate>,
    order: OrderSpec,
    includes: EagerLoad,
}

impl<T> MemorySource<T> {
    #[must_use]
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            predicate: None,
            order: OrderSpec::default(),
            includes: EagerLoad::new(),
        }
    }

    #[must_use]
    pub const fn predicate(&self) -> Option<&Predicate> {
        self.predicate.as_ref()
    }

    #[must_use]
    pub const fn order(&self) -> &OrderSpec {
        &self.order
    }

    /// Include directives received so far.
    #[must_use]
    pub const fn includes(&self) -> &EagerLoad {
        &self.includes
    }
}

impl<T: Row> MemorySource<T> {
    fn matching(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().filter(|row| {
            self.predicate
                .as_ref()
                .is_none_or(|predicate| eval(*row, predicate))
        })
    }
}

impl<T> FromIterator<T> for MemorySource<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Row + Clone> Queryable for MemorySource<T> {
    type Row = T;
    type Error = Infallible;

    fn include(mut self, eager: &EagerLoad) -> Self {
        for path in eager.paths() {
            self.includes = self.includes.with(path.clone());
        }
        self
    }

    fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(match self.predicate.take() {
            Some(existing) => existing & predicate,
            None => predicate,
        });
        self
    }

    fn order_by(mut self, order: OrderSpec) -> Self {
        self.order = order;
        self
    }
}

impl<T: Row + Clone> QuerySource for MemorySource<T> {
    fn count(&self) -> Result<u64, Self::Error> {
        Ok(u64::try_from(self.matching().count()).unwrap_or(u64::MAX))
    }

    fn materialize(&self, offset: u64, limit: u32) -> Result<Vec<T>, Self::Error> {
        let mut rows = self.matching().collect::<Vec<_>>();
        if !self.order.is_empty() {
            rows.sort_by(|left, right| compare_rows(&self.order, *left, *right));
        }

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(rows.into_iter().skip(offset).take(limit).cloned().collect())
    }
}

#[async_trait]
impl<T: Row + Clone + Send + Sync> AsyncQuerySource for MemorySource<T> {
    async fn count_async(&self) -> Result<u64, Self::Error> {
        self.count()
    }

    async fn materialize_async(&self, offset: u64, limit: u32) -> Result<Vec<T>, Self::Error> {
        self.materialize(offset, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::{Direction, query::SortKey},
        test_fixtures::{Post, sample_posts},
    };

    fn ids(rows: &[Post]) -> Vec<u64> {
        rows.iter().map(|post| post.id).collect()
    }

    #[test]
    fn unfiltered_source_counts_everything() {
        let source = MemorySource::new(sample_posts());

        assert_eq!(source.count(), Ok(5));
    }

    #[test]
    fn filters_accumulate_with_and() {
        let source = MemorySource::new(sample_posts())
            .filter(Predicate::contains(["title"], "t"))
            .filter(Predicate::eq(["pinned"], true));

        assert_eq!(source.count(), Ok(1));
        assert!(matches!(source.predicate(), Some(Predicate::And(_))));
    }

    #[test]
    fn materialize_slices_after_ordering() {
        let source = MemorySource::new(sample_posts())
            .order_by(OrderSpec::new(vec![SortKey::new(["score"], Direction::Desc)]));

        let rows = source.materialize(1, 2).expect("infallible");
        assert_eq!(ids(&rows), vec![1, 2]);
    }

    #[test]
    fn materialize_past_the_end_is_empty() {
        let source = MemorySource::new(sample_posts());

        assert_eq!(source.materialize(10, 5).map(|rows| rows.len()), Ok(0));
    }

    #[test]
    fn includes_are_recorded_untouched() {
        let eager = EagerLoad::new().with("author").with("tags");
        let source = MemorySource::new(sample_posts()).include(&eager);

        assert_eq!(source.includes(), &eager);
    }

    #[tokio::test]
    async fn async_variants_match_sync() {
        let source = MemorySource::new(sample_posts()).filter(Predicate::contains(["title"], "test"));

        assert_eq!(source.count_async().await, source.count());
        assert_eq!(
            source.materialize_async(0, 5).await.map(|rows| ids(&rows)),
            Ok(vec![2, 3])
        );
    }
}
