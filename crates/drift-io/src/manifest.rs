use std::fmt;

use thiserror::Error;

use drift_core::model::{parse_mapping, Mapping, ModelError, Node};
use drift_split::{split_documents, SplitError};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("no documents found in YAML")]
    NoDocuments,
    /// A manifest holds exactly one document; split the stream first.
    #[error("multiple documents found in YAML, split them before parsing")]
    MultipleDocuments,
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A single parsed configuration document with identity accessors.
///
/// This is read-only glue over the root [`Mapping`]; the diff engine takes
/// the mapping itself via [`Manifest::root`].
#[derive(Debug, Clone)]
pub struct Manifest {
    root: Mapping,
}

impl Manifest {
    /// Parse a YAML text that must contain exactly one non-empty document.
    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        let mut documents = split_documents(text)?;
        match documents.len() {
            0 => Err(ManifestError::NoDocuments),
            1 => {
                let root = parse_mapping(&documents.remove(0))?;
                Ok(Self { root })
            }
            _ => Err(ManifestError::MultipleDocuments),
        }
    }

    pub const fn root(&self) -> &Mapping {
        &self.root
    }

    pub fn api_version(&self) -> &str {
        self.string_at(&["apiVersion"])
    }

    pub fn kind(&self) -> &str {
        self.string_at(&["kind"])
    }

    pub fn name(&self) -> &str {
        self.string_at(&["metadata", "name"])
    }

    pub fn namespace(&self) -> &str {
        self.string_at(&["metadata", "namespace"])
    }

    pub fn has_namespace(&self) -> bool {
        !self.namespace().is_empty()
    }

    /// A consistent, unique identity path for this manifest, of the form
    /// `/apis/<apiVersion>/namespaces/<namespace>/<kind plural>/<name>`
    /// (with `/api` for the core `v1` group).
    pub fn self_link(&self) -> String {
        build_self_link(
            self.api_version(),
            self.namespace(),
            self.kind(),
            self.name(),
        )
    }

    fn string_at(&self, path: &[&str]) -> &str {
        let Some((leaf, parents)) = path.split_last() else {
            return "";
        };
        let mut mapping = &self.root;
        for key in parents {
            match mapping.get(*key) {
                Some(Node::Mapping(m)) => mapping = m,
                _ => return "",
            }
        }
        mapping.get(*leaf).and_then(Node::as_str).unwrap_or_default()
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_namespace() {
            write!(f, "{}/{}", self.namespace(), self.name())
        } else {
            f.write_str(self.name())
        }
    }
}

fn build_self_link(api_version: &str, namespace: &str, kind: &str, name: &str) -> String {
    let mut link = String::new();

    // Core v1 objects are served from /api; everything else from /apis.
    if api_version == "v1" {
        link.push_str("/api");
    } else {
        link.push_str("/apis");
    }

    if !api_version.is_empty() {
        link.push('/');
        link.push_str(api_version);
    }

    if !namespace.is_empty() {
        link.push_str("/namespaces/");
        link.push_str(namespace);
    }

    if !kind.is_empty() {
        let suffix = if kind.ends_with('s') { "es" } else { "s" };
        link.push('/');
        link.push_str(&kind.to_lowercase());
        link.push_str(suffix);
    }

    if !name.is_empty() {
        link.push('/');
        link.push_str(name);
    }

    link
}
