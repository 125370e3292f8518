//! Options controlling a diff.

use serde::{Deserialize, Serialize};

/// Field name used as identity when a type marks none.
pub const DEFAULT_IDENTITY_FIELD: &str = "id";

/// DiffOptions tunes how sequence items are matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiffOptions {
    /// Conventional identity field for records and map items. It takes
    /// precedence over an explicitly marked field.
    pub identity_field: String,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            identity_field: DEFAULT_IDENTITY_FIELD.to_string(),
        }
    }
}

impl DiffOptions {
    /// Creates options with defaults.
    pub fn new() -> Self {
        DiffOptions::default()
    }

    /// Sets the conventional identity field.
    pub fn with_identity_field(mut self, name: impl Into<String>) -> Self {
        self.identity_field = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identity_field() {
        assert_eq!(DiffOptions::new().identity_field, "id");
        assert_eq!(
            DiffOptions::new().with_identity_field("uid").identity_field,
            "uid"
        );
    }

    #[test]
    fn test_options_from_json() {
        let opts: DiffOptions = serde_json::from_str(r#"{"identityField":"key"}"#).unwrap();
        assert_eq!(opts.identity_field, "key");

        let opts: DiffOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, DiffOptions::default());
    }
}
