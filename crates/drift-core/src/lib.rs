//! Shared document model for the drift engine.
//!
//! Everything downstream (the diff engine, the splitter, the manifest wrapper)
//! operates over the tagged [`model::Node`] tree. Inputs from the external
//! YAML/JSON decoders are normalized into it at this boundary, so there is a
//! single comparison model rather than one per input representation.

pub mod exclusions;
pub mod flatten;
pub mod model;

pub use exclusions::{ExclusionSet, SKIP_FIELDS};
pub use model::{Mapping, ModelError, Node, NodeKind, Scalar};
