use super::*;
use crate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use proptest::prelude::*;

#[test]
fn defaults_are_first_page_of_five() {
    let params = RequestParameters::default();

    assert_eq!(params.page(), 1);
    assert_eq!(params.size(), DEFAULT_PAGE_SIZE);
    assert_eq!(params.offset(), 0);
    assert!(!params.has_filter());
    assert!(!params.has_sort());
}

#[test]
fn page_below_one_is_rejected() {
    let mut params = RequestParameters::new();

    for page in [0, -1, i64::MIN] {
        let err = params.set_page(page).expect_err("page below one");
        assert!(matches!(err, QueryError::Validation { name: "page", .. }));
    }
    assert_eq!(params.page(), 1, "failed assignment leaves the page unchanged");
}

#[test]
fn size_bounds_are_inclusive() {
    let mut params = RequestParameters::new();

    assert!(params.set_size(1).is_ok());
    assert!(params.set_size(1000).is_ok());
    assert_eq!(params.size(), 1000);

    for size in [0, 1001, -5] {
        let err = params.set_size(size).expect_err("size out of range");
        assert!(matches!(err, QueryError::Validation { name: "size", .. }));
    }
    assert_eq!(params.size(), 1000);
}

#[test]
fn tightened_limits_apply_to_size() {
    let limits = PageLimits::new(20, 50).expect("valid limits");
    let params = RequestParameters::with_limits(limits);

    assert_eq!(params.size(), 20);
    assert!(params.clone().with_size(50).is_ok());
    assert!(params.with_size(51).is_err());
}

#[test]
fn offset_skips_previous_pages() {
    let params = RequestParameters::new()
        .with_page(3)
        .and_then(|params| params.with_size(25))
        .expect("valid request");

    assert_eq!(params.offset(), 50);
}

#[test]
fn blank_strings_do_not_count_as_present() {
    let params = RequestParameters::new().with_filter("  ").with_sort("");

    assert!(!params.has_filter());
    assert!(!params.has_sort());
    assert_eq!(params.filter_items(), Ok(Vec::new()));
}

#[test]
fn filter_items_parse_the_filter_string() {
    let params = RequestParameters::new().with_filter("title[a,b]");
    let items = params.filter_items().expect("filter parses");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].property(), "title");
    assert_eq!(items[0].values(), ["a", "b"]);
}

#[test]
fn from_pairs_reads_known_keys() {
    let params = RequestParameters::from_pairs([
        ("Page", "2"),
        ("size", " 10 "),
        ("sort", "title desc"),
        ("filter", "title[x]"),
        ("unused", "ignored"),
    ])
    .expect("valid pairs");

    assert_eq!(params.page(), 2);
    assert_eq!(params.size(), 10);
    assert_eq!(params.sort(), Some("title desc"));
    assert_eq!(params.filter(), Some("title[x]"));
}

#[test]
fn from_pairs_rejects_non_integers() {
    let err = RequestParameters::from_pairs([("page", "two")]).expect_err("not an integer");

    assert!(matches!(err, QueryError::InvalidArgument { ref name, .. } if name == "page"));
}

#[test]
fn from_pairs_validates_ranges() {
    let err = RequestParameters::from_pairs([("size", "0")]).expect_err("size zero");

    assert!(matches!(err, QueryError::Validation { name: "size", .. }));
}

#[test]
fn deserialize_applies_defaults_and_validation() {
    let params: RequestParameters =
        serde_json::from_str(r#"{ "filter": "title[x]" }"#).expect("deserialize request");
    assert_eq!(params.page(), 1);
    assert_eq!(params.size(), DEFAULT_PAGE_SIZE);
    assert_eq!(params.filter(), Some("title[x]"));

    assert!(serde_json::from_str::<RequestParameters>(r#"{ "page": 0 }"#).is_err());
    assert!(serde_json::from_str::<RequestParameters>(r#"{ "size": 1001 }"#).is_err());
}

#[test]
fn serialize_omits_absent_strings() {
    let params = RequestParameters::new().with_sort("title");
    let json = serde_json::to_value(&params).expect("serialize request");

    assert_eq!(
        json,
        serde_json::json!({ "page": 1, "size": DEFAULT_PAGE_SIZE, "sort": "title" })
    );
}

proptest! {
    #[test]
    fn size_accepted_iff_in_range(size in -10i64..2000) {
        let mut params = RequestParameters::new();
        let accepted = params.set_size(size).is_ok();

        prop_assert_eq!(accepted, (1..=i64::from(MAX_PAGE_SIZE)).contains(&size));
    }

    #[test]
    fn page_accepted_iff_positive(page in -1000i64..1000) {
        let mut params = RequestParameters::new();

        prop_assert_eq!(params.set_page(page).is_ok(), page >= 1);
    }

    #[test]
    fn offset_is_page_minus_one_times_size(page in 1i64..10_000, size in 1i64..=1000) {
        let params = RequestParameters::new()
            .with_page(page)
            .and_then(|params| params.with_size(size))
            .expect("valid request");

        prop_assert_eq!(params.offset(), u64::try_from((page - 1) * size).unwrap_or_default());
    }
}
