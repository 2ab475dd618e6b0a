//! Drift-tolerant structural diff engine.
//!
//! Given a *desired* document (what the user declared) and an *observed*
//! document (what the live system currently reports), the engine emits one
//! record per user-declared field, carrying the **observed** value. Fields the
//! server added on its own never appear; fields the server rewrote appear with
//! the rewritten value. Fingerprinting the sorted records therefore stays
//! stable across server-side mutation and only moves when a user-declared
//! field actually changes.
//!
//! Determinism guarantees:
//! - byte-identical fingerprints for identical inputs
//! - insensitive to mapping key order on either side
//! - no partial output on error (a partial fingerprint could mask drift)

use log::debug;
use serde::Serialize;
use thiserror::Error;

use drift_core::exclusions::ExclusionSet;
use drift_core::model::{Mapping, Node, NodeKind};

#[derive(Debug, Error)]
pub enum DiffError {
    /// The same key holds structurally irreconcilable kinds on the two sides.
    #[error("type mismatch at '{path}': desired is {desired}, observed is {observed}")]
    TypeMismatch {
        path: String,
        desired: NodeKind,
        observed: NodeKind,
    },
}

/// One emitted fact: a field the user declared, with the value the live
/// system currently holds for it.
///
/// `name` is the immediate field name (`key`, or `key[index]` for sequence
/// elements), not a fully-qualified path. Same-named fields at different
/// nesting levels coexist as independent records; this is the legacy
/// fingerprint format and changing it would invalidate persisted baselines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRecord {
    pub name: String,
    pub value: String,
}

impl FieldRecord {
    /// Flat rendering used by the fingerprint grammar.
    pub fn render(&self) -> String {
        format!("fieldName:{},fieldValue:{}", self.name, self.value)
    }
}

/// Walk the desired/observed pair and collect one record per declared field.
///
/// Rules, applied recursively from the roots:
/// - excluded keys are skipped with all their descendants
/// - keys absent from `observed` are skipped (no drift signal exists)
/// - mapping vs mapping recurses; no record for the key itself
/// - sequences compare index by index; observed indices out of range emit an
///   empty-value sentinel rather than erroring
/// - everything else records the observed value, equal or not
///
/// Record order is unspecified; [`fingerprint`] applies the canonical sort.
pub fn reconcile(
    desired: &Mapping,
    observed: &Mapping,
    exclusions: &ExclusionSet,
) -> Result<Vec<FieldRecord>, DiffError> {
    let mut records = Vec::new();
    collect(desired, observed, "", exclusions, &mut records)?;
    Ok(records)
}

/// Compute the canonical fingerprint string.
///
/// Grammar: `("fieldName:" name "," "fieldValue:" value)*` with the rendered
/// records sorted lexicographically and concatenated without separators.
/// Sorting removes any sensitivity to mapping iteration order, so repeated
/// reads of an unchanged live object always produce the same bytes.
pub fn fingerprint(
    desired: &Mapping,
    observed: &Mapping,
    exclusions: &ExclusionSet,
) -> Result<String, DiffError> {
    let mut rendered: Vec<String> = reconcile(desired, observed, exclusions)?
        .iter()
        .map(FieldRecord::render)
        .collect();
    rendered.sort();
    Ok(rendered.concat())
}

fn collect(
    desired: &Mapping,
    observed: &Mapping,
    prefix: &str,
    exclusions: &ExclusionSet,
    out: &mut Vec<FieldRecord>,
) -> Result<(), DiffError> {
    for (key, desired_value) in desired {
        if exclusions.contains(key) {
            continue;
        }

        let Some(observed_value) = observed.get(key) else {
            debug!("skipping '{key}': absent from observed document");
            continue;
        };

        let path = join(prefix, key);

        match (desired_value, observed_value) {
            (Node::Mapping(d), Node::Mapping(o)) => {
                collect(d, o, &path, exclusions, out)?;
            }
            (Node::Mapping(_), _) | (_, Node::Mapping(_)) => {
                return Err(DiffError::TypeMismatch {
                    path,
                    desired: desired_value.kind(),
                    observed: observed_value.kind(),
                });
            }
            (Node::Sequence(d), o) => {
                collect_sequence(key, d, o, &path, exclusions, out)?;
            }
            (Node::Scalar(_), o) => {
                out.push(FieldRecord {
                    name: key.clone(),
                    value: o.render(),
                });
            }
        }
    }

    Ok(())
}

fn collect_sequence(
    key: &str,
    desired: &[Node],
    observed: &Node,
    path: &str,
    exclusions: &ExclusionSet,
    out: &mut Vec<FieldRecord>,
) -> Result<(), DiffError> {
    // A non-sequence observed value is treated as zero elements: every
    // desired index surfaces as a positional change, not an error.
    let observed_items: &[Node] = observed.as_sequence().map_or(&[], Vec::as_slice);

    for (i, desired_item) in desired.iter().enumerate() {
        let name = format!("{key}[{i}]");

        let Some(observed_item) = observed_items.get(i) else {
            debug!("sequence '{path}' has no observed element at index {i}");
            out.push(FieldRecord {
                name,
                value: String::new(),
            });
            continue;
        };

        match (desired_item, observed_item) {
            (Node::Mapping(d), Node::Mapping(o)) => {
                collect(d, o, &format!("{path}[{i}]"), exclusions, out)?;
            }
            _ => out.push(FieldRecord {
                name,
                value: observed_item.render(),
            }),
        }
    }

    Ok(())
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
