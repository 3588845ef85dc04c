//! Module: response
//! Responsibility: the page payload returned by page assembly.
//! Does not own: counting or materializing rows.
//! Boundary: counters are fixed at construction; only `project` maps data.

#[cfg(test)]
mod tests;

use serde::Serialize;

///
/// Page
///
/// One page of rows plus the counters describing the whole result.
/// `pages` is `ceil(elements / size)`, and zero when nothing matched.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Page<T> {
    data: Vec<T>,
    current: u32,
    size: u32,
    elements: u64,
    pages: u64,
}

impl<T> Page<T> {
    /// Build a page, deriving `pages` and keeping at most `size` rows.
    #[must_use]
    pub fn new(mut data: Vec<T>, current: u32, size: u32, elements: u64) -> Self {
        data.truncate(usize::try_from(size).unwrap_or(usize::MAX));

        Self {
            data,
            current,
            size,
            elements,
            pages: page_count(elements, size),
        }
    }

    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub const fn elements(&self) -> u64 {
        self.elements
    }

    #[must_use]
    pub const fn pages(&self) -> u64 {
        self.pages
    }

    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Map every row through `f`, copying the counters unchanged.
    #[must_use]
    pub fn project<R, F>(self, f: F) -> Page<R>
    where
        F: FnMut(T) -> R,
    {
        Page {
            data: self.data.into_iter().map(f).collect(),
            current: self.current,
            size: self.size,
            elements: self.elements,
            pages: self.pages,
        }
    }
}

/// Number of pages of `size` needed for `elements` rows.
#[must_use]
pub fn page_count(elements: u64, size: u32) -> u64 {
    if elements == 0 || size == 0 {
        return 0;
    }

    elements.div_ceil(u64::from(size))
}
