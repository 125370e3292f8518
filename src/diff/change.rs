//! Change records produced by a diff.

use crate::path::Path;
use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// Change is a single difference between the previous and current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    /// A leaf value differs. Either side is `Null` when the location only
    /// exists on the other side.
    ValueUpdate {
        path: Path,
        previous: Value,
        current: Value,
    },
    /// Membership of a sequence of scalars changed.
    CollectionDelta {
        path: Path,
        removed: Vec<Value>,
        added: Vec<Value>,
    },
}

impl Change {
    /// Creates a value update.
    pub fn value_update(path: Path, previous: Value, current: Value) -> Self {
        Change::ValueUpdate {
            path,
            previous,
            current,
        }
    }

    /// Creates a collection delta.
    pub fn collection_delta(path: Path, removed: Vec<Value>, added: Vec<Value>) -> Self {
        Change::CollectionDelta {
            path,
            removed,
            added,
        }
    }

    /// Returns the location of the change.
    pub fn path(&self) -> &Path {
        match self {
            Change::ValueUpdate { path, .. } | Change::CollectionDelta { path, .. } => path,
        }
    }

    pub fn is_value_update(&self) -> bool {
        matches!(self, Change::ValueUpdate { .. })
    }

    pub fn is_collection_delta(&self) -> bool {
        matches!(self, Change::CollectionDelta { .. })
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::ValueUpdate {
                path,
                previous,
                current,
            } => write!(f, "~ {}: {} -> {}", path, previous, current),
            Change::CollectionDelta {
                path,
                removed,
                added,
            } => {
                write!(f, "~ {}:", path)?;
                for value in removed {
                    write!(f, " -{}", value)?;
                }
                for value in added {
                    write!(f, " +{}", value)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathElement;

    fn path(name: &str) -> Path {
        Path::from_elements(vec![PathElement::field_name(name)])
    }

    #[test]
    fn test_change_accessors() {
        let update = Change::value_update(path("status"), Value::Null, Value::Int(1));
        assert!(update.is_value_update());
        assert!(!update.is_collection_delta());
        assert_eq!(update.path(), &path("status"));

        let delta = Change::collection_delta(path("services"), vec![], vec![Value::Int(3)]);
        assert!(delta.is_collection_delta());
        assert_eq!(delta.path(), "services");
    }

    #[test]
    fn test_change_display() {
        let update = Change::value_update(
            path("status"),
            Value::String("ACTIVE".into()),
            Value::String("EXPIRED".into()),
        );
        assert_eq!(update.to_string(), "~ status: ACTIVE -> EXPIRED");

        let delta = Change::collection_delta(
            path("services"),
            vec![Value::String("Wash".into())],
            vec![Value::String("Oil".into())],
        );
        assert_eq!(delta.to_string(), "~ services: -Wash +Oil");
    }

    #[test]
    fn test_change_serializes_with_kind_tag() {
        let update = Change::value_update(path("id"), Value::Null, Value::Int(3));
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"kind":"value_update","path":"id","previous":null,"current":3}"#
        );

        let delta = Change::collection_delta(path("tags"), vec![Value::Int(1)], vec![]);
        assert_eq!(
            serde_json::to_string(&delta).unwrap(),
            r#"{"kind":"collection_delta","path":"tags","removed":[1],"added":[]}"#
        );
    }
}
