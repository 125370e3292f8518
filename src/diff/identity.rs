//! Identity resolution for items of composite sequences.

use super::error::DiffError;
use super::options::DiffOptions;
use crate::path::Path;
use crate::value::{Record, Value};

/// Resolves the identity of a sequence item.
///
/// A record uses its conventional identity field (`id` by default) when it
/// has one, and otherwise its single explicitly marked field. Maps only use
/// the conventional field. Anything else has no identity.
pub fn resolve_identity(
    path: &Path,
    element: &Value,
    options: &DiffOptions,
) -> Result<Value, DiffError> {
    match element {
        Value::Record(record) => resolve_record_identity(path, record, options),
        Value::Map(map) => map
            .get(&options.identity_field)
            .cloned()
            .ok_or_else(|| DiffError::missing_identity(path.to_string(), "map")),
        other => Err(DiffError::missing_identity(path.to_string(), other.kind())),
    }
}

fn resolve_record_identity(
    path: &Path,
    record: &Record,
    options: &DiffOptions,
) -> Result<Value, DiffError> {
    let marked = record.identity_fields();
    if marked.len() > 1 {
        return Err(DiffError::ambiguous_identity(
            path.to_string(),
            record.type_name(),
            marked.to_vec(),
        ));
    }

    if let Some(id) = record.get(&options.identity_field) {
        return Ok(id.clone());
    }

    match marked {
        [field] => record.get(field).cloned().ok_or_else(|| {
            DiffError::missing_identity(path.to_string(), record.type_name())
        }),
        _ => Err(DiffError::missing_identity(
            path.to_string(),
            record.type_name(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Map;

    fn resolve(element: &Value) -> Result<Value, DiffError> {
        resolve_identity(&Path::new(), element, &DiffOptions::default())
    }

    #[test]
    fn test_id_field_by_convention() {
        let item = Record::new("Item")
            .with_field("id", Value::Int(4))
            .with_field("name", Value::String("A".into()));
        assert_eq!(resolve(&Value::Record(item)), Ok(Value::Int(4)));
    }

    #[test]
    fn test_id_field_takes_precedence_over_marking() {
        let item = Record::new("Item")
            .with_field("id", Value::Int(4))
            .with_field("key", Value::String("k".into()))
            .with_identity_field("key");
        assert_eq!(resolve(&Value::Record(item)), Ok(Value::Int(4)));
    }

    #[test]
    fn test_marked_field() {
        let item = Record::new("Item")
            .with_field("key", Value::String("k".into()))
            .with_identity_field("key");
        assert_eq!(resolve(&Value::Record(item)), Ok(Value::String("k".into())));
    }

    #[test]
    fn test_marked_field_absent_from_record() {
        let item = Record::new("Item")
            .with_field("key", Value::String("k".into()))
            .with_identity_field("kee");
        assert_eq!(
            resolve(&Value::Record(item)),
            Err(DiffError::missing_identity("", "Item"))
        );
    }

    #[test]
    fn test_configured_identity_field() {
        let item = Record::new("Item").with_field("uid", Value::Int(9));
        let opts = DiffOptions::new().with_identity_field("uid");
        assert_eq!(
            resolve_identity(&Path::new(), &Value::Record(item), &opts),
            Ok(Value::Int(9))
        );
    }

    #[test]
    fn test_two_markings_are_ambiguous() {
        let item = Record::new("Item")
            .with_field("id", Value::Int(1))
            .with_field("a", Value::Int(1))
            .with_field("b", Value::Int(2))
            .with_identity_field("a")
            .with_identity_field("b");
        assert!(matches!(
            resolve(&Value::Record(item)),
            Err(DiffError::AmbiguousIdentity { ref type_name, .. }) if type_name == "Item"
        ));
    }

    #[test]
    fn test_missing_identity() {
        let item = Record::new("Item").with_field("name", Value::String("A".into()));
        assert_eq!(
            resolve(&Value::Record(item)),
            Err(DiffError::missing_identity("", "Item"))
        );
        assert_eq!(
            resolve(&Value::Null),
            Err(DiffError::missing_identity("", "null"))
        );
        assert_eq!(
            resolve(&Value::List(vec![])),
            Err(DiffError::missing_identity("", "list"))
        );
    }

    #[test]
    fn test_map_items_use_id_key() {
        let mut map = Map::new();
        map.set("id".into(), Value::String("a1".into()));
        assert_eq!(resolve(&Value::Map(map)), Ok(Value::String("a1".into())));

        assert_eq!(
            resolve(&Value::Map(Map::new())),
            Err(DiffError::missing_identity("", "map"))
        );
    }
}
