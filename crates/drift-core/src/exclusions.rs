use std::collections::HashSet;

use log::debug;

/// Field names that are always excluded from comparison.
///
/// These are server-managed bookkeeping fields that change independent of
/// user intent and must never read as drift.
pub const SKIP_FIELDS: [&str; 8] = [
    "status",
    "finalizers",
    "initializers",
    "ownerReferences",
    "creationTimestamp",
    "generation",
    "resourceVersion",
    "uid",
];

/// The effective exclusion policy for one diff invocation.
///
/// An explicit value rather than process-wide state, so callers with
/// different policies can coexist. The built-in [`SKIP_FIELDS`] set always
/// applies; caller-supplied names are unioned in. Matching is by bare field
/// name at every mapping level, not by path.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    /// The built-in policy with no extra names.
    pub fn new() -> Self {
        Self::with_ignored(std::iter::empty::<String>())
    }

    /// The built-in policy plus caller-supplied names.
    pub fn with_ignored<I, S>(ignored: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: HashSet<String> = SKIP_FIELDS.iter().map(ToString::to_string).collect();
        names.extend(ignored.into_iter().map(Into::into));
        Self { names }
    }

    pub fn contains(&self, field_name: &str) -> bool {
        let skip = self.names.contains(field_name);
        if skip {
            debug!("field '{field_name}' is in the exclusion set");
        }
        skip
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::with_ignored(iter)
    }
}
