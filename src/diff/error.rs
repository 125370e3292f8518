//! Errors that abort a diff.

use thiserror::Error;

/// DiffError represents caller data that cannot be reconciled.
///
/// All variants are fatal for the `diff` call that raised them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error("{type_name} at '{path}' marks more than one identity field: {}", .fields.join(", "))]
    AmbiguousIdentity {
        path: String,
        type_name: String,
        fields: Vec<String>,
    },

    #[error("no id field or marked identity field found for {type_name} at '{path}'")]
    MissingIdentity { path: String, type_name: String },

    #[error("sequence at '{path}' mixes scalar and composite elements")]
    MixedSequenceShape { path: String },
}

impl DiffError {
    /// Creates an ambiguous identity error.
    pub fn ambiguous_identity(
        path: impl Into<String>,
        type_name: impl Into<String>,
        fields: Vec<String>,
    ) -> Self {
        DiffError::AmbiguousIdentity {
            path: path.into(),
            type_name: type_name.into(),
            fields,
        }
    }

    /// Creates a missing identity error.
    pub fn missing_identity(path: impl Into<String>, type_name: impl Into<String>) -> Self {
        DiffError::MissingIdentity {
            path: path.into(),
            type_name: type_name.into(),
        }
    }

    /// Creates a mixed sequence shape error.
    pub fn mixed_sequence_shape(path: impl Into<String>) -> Self {
        DiffError::MixedSequenceShape { path: path.into() }
    }

    /// Returns the path at which the error was raised.
    pub fn path(&self) -> &str {
        match self {
            DiffError::AmbiguousIdentity { path, .. }
            | DiffError::MissingIdentity { path, .. }
            | DiffError::MixedSequenceShape { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_error_display() {
        let err = DiffError::ambiguous_identity("items", "Item", vec!["a".into(), "b".into()]);
        assert_eq!(
            err.to_string(),
            "Item at 'items' marks more than one identity field: a, b"
        );

        let err = DiffError::missing_identity("items", "null");
        assert!(err.to_string().contains("no id field"));
        assert_eq!(err.path(), "items");

        let err = DiffError::mixed_sequence_shape("");
        assert!(err.to_string().contains("mixes scalar and composite"));
    }
}
