use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// A document mapping: unique string keys, insertion-ordered iteration.
///
/// Iteration order is never semantically significant; every consumer must
/// produce the same result under any key permutation.
pub type Mapping = IndexMap<String, Node>;

/// A leaf value with a stable, locale-independent textual rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

/// One node in the untyped document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Scalar(Scalar),
    Sequence(Vec<Node>),
    Mapping(Mapping),
}

/// Node kind, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Scalar,
    Sequence,
    Mapping,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Scalar => "scalar",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    /// Mapping keys must render as scalars; a sequence or mapping key cannot
    /// be addressed by field name.
    #[error("mapping key is not a scalar (got {kind})")]
    NonScalarKey { kind: NodeKind },
    #[error("expected a mapping at the document root, got {kind}")]
    UnexpectedRoot { kind: NodeKind },
}

impl Scalar {
    /// Stable textual form.
    ///
    /// `Null` renders as the empty string; it doubles as the empty-value
    /// sentinel the diff engine emits for out-of-range sequence indices.
    pub fn render(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Float(x) => x.to_string(),
            Self::String(s) => s.clone(),
        }
    }
}

impl Node {
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Scalar(_) => NodeKind::Scalar,
            Self::Sequence(_) => NodeKind::Sequence,
            Self::Mapping(_) => NodeKind::Mapping,
        }
    }

    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub const fn as_sequence(&self) -> Option<&Vec<Node>> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Render a node as a flat value string.
    ///
    /// Scalars use [`Scalar::render`]. Containers only reach this path when
    /// they are compared opaquely (a sequence or mapping standing where the
    /// declared value was a scalar); they render in a `[a b]` / `map[k:v]`
    /// style with mapping keys sorted for determinism.
    pub fn render(&self) -> String {
        match self {
            Self::Scalar(s) => s.render(),
            Self::Sequence(items) => {
                let parts: Vec<String> = items.iter().map(Node::render).collect();
                format!("[{}]", parts.join(" "))
            }
            Self::Mapping(entries) => {
                let mut parts: Vec<String> = entries
                    .iter()
                    .map(|(k, v)| format!("{k}:{}", v.render()))
                    .collect();
                parts.sort();
                format!("map[{}]", parts.join(" "))
            }
        }
    }
}

impl From<Scalar> for Node {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl TryFrom<serde_yaml::Value> for Node {
    type Error = ModelError;

    fn try_from(value: serde_yaml::Value) -> Result<Self, ModelError> {
        use serde_yaml::Value;

        Ok(match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(number_scalar(
                n.as_i64(),
                n.as_u64(),
                n.as_f64().unwrap_or_default(),
            )),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Sequence(items) => Self::Sequence(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Mapping(entries) => {
                let mut mapping = Mapping::with_capacity(entries.len());
                for (key, value) in entries {
                    mapping.insert(yaml_key(key)?, Self::try_from(value)?);
                }
                Self::Mapping(mapping)
            }
            // Tags carry no structural meaning for comparison purposes.
            Value::Tagged(tagged) => Self::try_from(tagged.value)?,
        })
    }
}

impl TryFrom<serde_json::Value> for Node {
    type Error = ModelError;

    fn try_from(value: serde_json::Value) -> Result<Self, ModelError> {
        use serde_json::Value;

        Ok(match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(number_scalar(
                n.as_i64(),
                n.as_u64(),
                n.as_f64().unwrap_or_default(),
            )),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Array(items) => Self::Sequence(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(entries) => {
                let mut mapping = Mapping::with_capacity(entries.len());
                for (key, value) in entries {
                    mapping.insert(key, Self::try_from(value)?);
                }
                Self::Mapping(mapping)
            }
        })
    }
}

// Integers outside the i64 range degrade to floats; configuration documents do
// not carry values that large in practice.
fn number_scalar(as_i64: Option<i64>, as_u64: Option<u64>, as_f64: f64) -> Scalar {
    if let Some(n) = as_i64 {
        Scalar::Int(n)
    } else if let Some(n) = as_u64 {
        Scalar::Float(n as f64)
    } else {
        Scalar::Float(as_f64)
    }
}

/// YAML allows non-string scalar keys; render them to their field-name form.
fn yaml_key(key: serde_yaml::Value) -> Result<String, ModelError> {
    let node = Node::try_from(key)?;
    match node {
        Node::Scalar(s) => Ok(s.render()),
        other => Err(ModelError::NonScalarKey { kind: other.kind() }),
    }
}

/// Parse a single YAML document into a root [`Mapping`].
///
/// This is the boundary between the external decoder and the comparison
/// model; the diff engine itself never touches raw text.
pub fn parse_mapping(text: &str) -> Result<Mapping, ModelError> {
    let value: serde_yaml::Value = serde_yaml::from_str(text)?;
    match Node::try_from(value)? {
        Node::Mapping(m) => Ok(m),
        other => Err(ModelError::UnexpectedRoot { kind: other.kind() }),
    }
}
