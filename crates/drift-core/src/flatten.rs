//! Flatten a document tree into a dotted-path leaf map.
//!
//! Used by callers that need per-field addressing of a parsed document
//! (display, attribute export). Not part of the fingerprint path.

use std::collections::BTreeMap;

use crate::model::{Mapping, Node};

/// Flatten a root mapping into `path -> rendered value` entries.
///
/// - nested mapping keys join with `.`
/// - sequences emit a `path.#` length entry plus `path.<index>` entries
/// - leaves whose rendering is empty (nulls, empty strings) are dropped,
///   as are empty mappings
///
/// The `BTreeMap` gives deterministic iteration order.
pub fn flatten(mapping: &Mapping) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    flatten_into(mapping, "", &mut out);
    out
}

fn flatten_into(mapping: &Mapping, prefix: &str, out: &mut BTreeMap<String, String>) {
    for (key, value) in mapping {
        let path = join(prefix, key);
        flatten_node(value, &path, out);
    }
}

fn flatten_node(node: &Node, path: &str, out: &mut BTreeMap<String, String>) {
    match node {
        Node::Scalar(s) => {
            let rendered = s.render();
            if !rendered.is_empty() {
                out.insert(path.to_string(), rendered);
            }
        }
        Node::Sequence(items) => {
            out.insert(format!("{path}.#"), items.len().to_string());
            for (i, item) in items.iter().enumerate() {
                flatten_node(item, &format!("{path}.{i}"), out);
            }
        }
        Node::Mapping(m) => flatten_into(m, path, out),
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
