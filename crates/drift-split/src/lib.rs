//! Multi-document stream splitter.
//!
//! Tokenizes a batch of concatenated YAML documents on the literal `"\n---"`
//! separator and returns the ordered, trimmed, non-empty documents. Each
//! segment is validated with the external YAML decoder before it is accepted:
//! malformed input fails the whole call rather than silently dropping a
//! document, while empty and comment-only segments are filtered out.

use log::debug;
use thiserror::Error;

mod scanner;

pub use scanner::DocumentScanner;

/// The literal document separator. A separator line terminates the segment
/// before it; the remainder of that line is not part of any document.
pub const DOCUMENT_SEPARATOR: &str = "\n---";

#[derive(Debug, Error)]
pub enum SplitError {
    /// A delimited segment is not valid YAML. Carries the offending raw text
    /// so the operator can correct the input.
    #[error("error parsing yaml document: {source}\n{document}")]
    DocumentParse {
        document: String,
        source: serde_yaml::Error,
    },
    /// A segment parsed, but its root is not a mapping.
    #[error("expected a mapping document:\n{document}")]
    UnexpectedRoot { document: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("document stream is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Split a multi-document stream into individual trimmed document texts.
///
/// - segments are trimmed of surrounding whitespace
/// - segments that parse to nothing or to an empty mapping (comment-only
///   documents) are dropped, wherever they occur
/// - a final segment without a trailing separator is still captured
/// - an entirely empty or all-comment input yields an empty sequence
pub fn split_documents(content: &str) -> Result<Vec<String>, SplitError> {
    let mut scanner = DocumentScanner::new(content.as_bytes());
    let mut documents = Vec::new();

    while let Some(segment) = scanner.next_document()? {
        let document = segment.trim();
        if document.is_empty() {
            continue;
        }

        match serde_yaml::from_str::<serde_yaml::Value>(document) {
            Err(source) => {
                return Err(SplitError::DocumentParse {
                    document: document.to_string(),
                    source,
                });
            }
            Ok(serde_yaml::Value::Null) => {
                debug!("dropping comment-only document segment");
            }
            Ok(serde_yaml::Value::Mapping(m)) if m.is_empty() => {
                debug!("dropping empty document segment");
            }
            Ok(serde_yaml::Value::Mapping(_)) => documents.push(document.to_string()),
            Ok(_) => {
                return Err(SplitError::UnexpectedRoot {
                    document: document.to_string(),
                });
            }
        }
    }

    Ok(documents)
}
