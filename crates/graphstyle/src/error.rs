//! Error types for the style engine.

use thiserror::Error;

use crate::stylesheet::ParseError;

/// Error returned when a stylesheet or selector cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphStyleError {
    /// A selector string did not start with `node` or `relationship`.
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// The stylesheet text was rejected by the strict parser.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Error returned when loading [`StyleDefaults`](crate::StyleDefaults) from a file.
#[derive(Debug, Error)]
pub enum DefaultsError {
    /// The defaults file could not be read.
    #[error("failed to read defaults file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The YAML document did not match the defaults schema.
    #[error("invalid YAML defaults: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document did not match the defaults schema.
    #[error("invalid JSON defaults: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selector_display() {
        let err = GraphStyleError::InvalidSelector {
            selector: "edge.KNOWS".to_string(),
            reason: "unknown tag 'edge'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("edge.KNOWS"));
        assert!(msg.contains("unknown tag"));
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err: GraphStyleError = ParseError::UnterminatedBlock { offset: 4 }.into();
        assert_eq!(
            err.to_string(),
            ParseError::UnterminatedBlock { offset: 4 }.to_string()
        );
    }
}
