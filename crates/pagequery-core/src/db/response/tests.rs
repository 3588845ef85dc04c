use super::*;
use proptest::prelude::*;

#[test]
fn empty_result_has_no_pages() {
    let page = Page::<u32>::new(Vec::new(), 1, 5, 0);

    assert_eq!(page.pages(), 0);
    assert!(page.data().is_empty());
}

#[test]
fn partial_last_page_counts_as_a_page() {
    let page = Page::new(vec![11, 12], 3, 5, 12);

    assert_eq!(page.pages(), 3);
    assert_eq!(page.current(), 3);
    assert_eq!(page.elements(), 12);
}

#[test]
fn data_is_capped_at_size() {
    let page = Page::new((0..8).collect(), 1, 5, 8);

    assert_eq!(page.data(), [0, 1, 2, 3, 4]);
}

#[test]
fn project_maps_rows_and_keeps_counters() {
    let page = Page::new(vec![1, 2, 3], 2, 3, 7);
    let projected = page.project(|n| format!("row-{n}"));

    assert_eq!(projected.data(), ["row-1", "row-2", "row-3"]);
    assert_eq!(projected.current(), 2);
    assert_eq!(projected.size(), 3);
    assert_eq!(projected.elements(), 7);
    assert_eq!(projected.pages(), 3);
}

#[test]
fn serializes_all_fields() {
    let page = Page::new(vec!["a"], 1, 5, 1);
    let json = serde_json::to_value(&page).expect("serialize page");

    assert_eq!(
        json,
        serde_json::json!({
            "data": ["a"],
            "current": 1,
            "size": 5,
            "elements": 1,
            "pages": 1,
        })
    );
}

proptest! {
    #[test]
    fn pages_is_ceiling_of_elements_over_size(elements in 0u64..1_000_000, size in 1u32..=1000) {
        let expected = if elements == 0 {
            0
        } else {
            (elements + u64::from(size) - 1) / u64::from(size)
        };

        prop_assert_eq!(page_count(elements, size), expected);
    }

    #[test]
    fn project_preserves_counters(len in 0usize..20, size in 1u32..=10, elements in 0u64..200) {
        let page = Page::new((0..len).collect::<Vec<_>>(), 1, size, elements);
        let before = (page.current(), page.size(), page.elements(), page.pages(), page.data().len());
        let projected = page.project(|n| n * 2);

        prop_assert_eq!(
            (projected.current(), projected.size(), projected.elements(), projected.pages(), projected.data().len()),
            before
        );
    }
}
