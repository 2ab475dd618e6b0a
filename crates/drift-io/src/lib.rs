//! `drift-io` is the single supported public entrypoint for the drift engine:
//! the document model, the drift-tolerant diff engine, the multi-document
//! splitter, and the manifest convenience wrapper.
//!
//! This crate intentionally contains **no** transport, retry, or lifecycle
//! logic. Those belong to the calling layer. `drift-io` focuses on:
//! - the canonical document model
//! - deterministic fingerprints
//! - document stream splitting
//! - manifest identity helpers

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `drift_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may
// change without notice.

// Re-export the canonical document model.
#[doc(hidden)]
pub mod core {
    pub use drift_core::exclusions::{ExclusionSet, SKIP_FIELDS};
    pub use drift_core::flatten::flatten;
    pub use drift_core::model::{parse_mapping, Mapping, ModelError, Node, NodeKind, Scalar};
}

// Re-export the diff engine.
#[doc(hidden)]
pub mod diff {
    pub use drift_diff::{fingerprint, reconcile, DiffError, FieldRecord};
}

// Re-export the splitter.
#[doc(hidden)]
pub mod split {
    pub use drift_split::{split_documents, DocumentScanner, SplitError, DOCUMENT_SEPARATOR};
}

/// Single-document manifest wrapper and identity helpers.
pub mod manifest;

/// Convenience prelude for consumers.
///
/// This is the **only supported** import surface for external users.
pub mod prelude {
    pub use crate::core::{flatten, parse_mapping, ExclusionSet, Mapping, Node, NodeKind, Scalar};
    pub use crate::diff::{fingerprint, reconcile, DiffError, FieldRecord};
    pub use crate::manifest::{Manifest, ManifestError};
    pub use crate::split::{split_documents, DocumentScanner, SplitError};
}
