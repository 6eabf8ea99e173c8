//! Error types for trisvg

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for trisvg operations
pub type TriSvgResult<T> = Result<T, TriSvgError>;

/// Main error type for trisvg
#[derive(Error, Debug)]
pub enum TriSvgError {
    #[error("Input file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("No <path> elements with geometry found in SVG input")]
    NoPathElementsFound,

    #[error("Path #{index} is missing its `{attribute}` attribute")]
    MissingAttribute {
        index: usize,
        attribute: &'static str,
    },

    #[error("Malformed path data{}: {reason} (in {raw:?})", at(.index))]
    MalformedPath {
        index: Option<usize>,
        raw: String,
        reason: String,
    },

    #[error("Malformed fill color{}: {reason} (in {raw:?})", at(.index))]
    MalformedColor {
        index: Option<usize>,
        raw: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn at(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" in path #{}", i),
        None => String::new(),
    }
}

impl TriSvgError {
    /// Create a malformed path error for a raw `d` string
    pub fn malformed_path(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPath {
            index: None,
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed color error for a raw `fill` string
    pub fn malformed_color(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedColor {
            index: None,
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Attach the index of the offending `<path>` element.
    ///
    /// Only parse errors carry an index; other variants are returned as-is.
    pub fn at_path(self, path_index: usize) -> Self {
        match self {
            Self::MalformedPath { raw, reason, .. } => Self::MalformedPath {
                index: Some(path_index),
                raw,
                reason,
            },
            Self::MalformedColor { raw, reason, .. } => Self::MalformedColor {
                index: Some(path_index),
                raw,
                reason,
            },
            other => other,
        }
    }

    /// Stable name of the error kind, used as a logging field.
    pub fn category(&self) -> &'static str {
        match self {
            TriSvgError::FileNotFound { .. } => "file_not_found",
            TriSvgError::NoPathElementsFound => "no_path_elements",
            TriSvgError::MissingAttribute { .. } => "missing_attribute",
            TriSvgError::MalformedPath { .. } => "malformed_path",
            TriSvgError::MalformedColor { .. } => "malformed_color",
            TriSvgError::Config(_) => "config",
            TriSvgError::Io(_) => "io",
            TriSvgError::Json(_) => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(TriSvgError::NoPathElementsFound.category(), "no_path_elements");
        assert_eq!(
            TriSvgError::malformed_path("M1", "bad").category(),
            "malformed_path"
        );
        assert_eq!(TriSvgError::config("x").category(), "config");
    }

    #[test]
    fn test_at_path_attaches_index() {
        let err = TriSvgError::malformed_color("rgb(1,2)", "expected 3 channels").at_path(7);
        assert!(matches!(err, TriSvgError::MalformedColor { index: Some(7), .. }));
        assert_eq!(
            err.to_string(),
            "Malformed fill color in path #7: expected 3 channels (in \"rgb(1,2)\")"
        );
    }

    #[test]
    fn test_at_path_leaves_other_variants() {
        let err = TriSvgError::NoPathElementsFound.at_path(3);
        assert!(matches!(err, TriSvgError::NoPathElementsFound));
    }

    #[test]
    fn test_display_without_index() {
        let err = TriSvgError::malformed_path("Mx,1", "invalid number \"x\"");
        assert_eq!(
            err.to_string(),
            "Malformed path data: invalid number \"x\" (in \"Mx,1\")"
        );
    }

    #[test]
    fn test_missing_attribute_display() {
        let err = TriSvgError::MissingAttribute {
            index: 2,
            attribute: "fill",
        };
        assert_eq!(err.to_string(), "Path #2 is missing its `fill` attribute");
    }
}
