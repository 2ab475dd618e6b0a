use std::collections::BTreeMap;

use drift_core::flatten::flatten;
use drift_core::model::parse_mapping;

fn expect(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn flatten_simple_map() {
    let doc = parse_mapping("test1: test2\n").unwrap();
    assert_eq!(flatten(&doc), expect(&[("test1", "test2")]));
}

#[test]
fn flatten_all_primitive_types() {
    let doc = parse_mapping(
        "a_string: test2\na_boolean: true\na_number: 123\na_float: 123.456\n",
    )
    .unwrap();
    assert_eq!(
        flatten(&doc),
        expect(&[
            ("a_boolean", "true"),
            ("a_float", "123.456"),
            ("a_number", "123"),
            ("a_string", "test2"),
        ])
    );
}

#[test]
fn flatten_drops_empty_values_and_empty_mappings() {
    let doc = parse_mapping("atest: test\nmeta: {}\nempty: ''\nnothing: null\n").unwrap();
    assert_eq!(flatten(&doc), expect(&[("atest", "test")]));
}

#[test]
fn flatten_nested_maps_join_with_dots() {
    let doc = parse_mapping(
        "atest: test\nmeta:\n  annotations:\n    helm.sh/hook: crd-install\n",
    )
    .unwrap();
    assert_eq!(
        flatten(&doc),
        expect(&[
            ("atest", "test"),
            ("meta.annotations.helm.sh/hook", "crd-install"),
        ])
    );
}

#[test]
fn flatten_sequences_emit_count_and_indexed_entries() {
    let doc = parse_mapping("my-slice:\n  - first\n  - second\n").unwrap();
    assert_eq!(
        flatten(&doc),
        expect(&[
            ("my-slice.#", "2"),
            ("my-slice.0", "first"),
            ("my-slice.1", "second"),
        ])
    );
}

#[test]
fn flatten_sequences_under_nested_maps() {
    let doc = parse_mapping("meta:\n  my-slice:\n    - first\n    - second\n").unwrap();
    assert_eq!(
        flatten(&doc),
        expect(&[
            ("meta.my-slice.#", "2"),
            ("meta.my-slice.0", "first"),
            ("meta.my-slice.1", "second"),
        ])
    );
}

#[test]
fn flatten_empty_document() {
    let doc = parse_mapping("{}").unwrap();
    assert!(flatten(&doc).is_empty());
}
